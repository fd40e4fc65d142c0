//! Rule predicates over decoded text and argument names.
//!
//! These are pure functions; the analyzer decides where to report.

use crate::keywords::SensitiveKeywords;

/// Returns true if `c` may appear in a log message: ASCII letters, ASCII
/// digits and the space character.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// Returns true if `msg` starts with a lowercase ASCII letter.
///
/// The empty string does not start with anything; callers exempt it before
/// asking.
pub fn starts_with_lowercase(msg: &str) -> bool {
    msg.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Returns the index of the first character of `chars` that is not allowed in
/// a log message.
pub fn index_illegal_character<I>(chars: I) -> Option<usize>
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().position(|c| !is_allowed_char(c))
}

/// A sensitive keyword found inside a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensitiveMatch<'a> {
    /// Byte offset of the match inside the lowercased name
    pub index: usize,
    /// The keyword as configured
    pub keyword: &'a str,
}

/// Searches `name` for a sensitive keyword, ignoring case.
///
/// The leftmost match wins; among keywords matching at the same offset the
/// lexicographically smallest one is reported.
///
/// # Examples
///
/// ```
/// use logcheck::{SensitiveKeywords, rules::find_sensitive_name};
///
/// let keywords = SensitiveKeywords::parse("admin,root");
/// let found = find_sensitive_name("the_Root_user", &keywords).unwrap();
/// assert_eq!((found.index, found.keyword), (4, "root"));
/// ```
pub fn find_sensitive_name<'a>(
    name: &str,
    keywords: &'a SensitiveKeywords,
) -> Option<SensitiveMatch<'a>> {
    let lower = name.to_lowercase();
    keywords
        .folded()
        .filter_map(|(folded, keyword)| {
            lower
                .find(folded)
                .map(|index| SensitiveMatch { index, keyword })
        })
        .min_by_key(|found| found.index)
}
