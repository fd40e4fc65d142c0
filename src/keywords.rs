use std::collections::BTreeMap;

/// Default `sensitive-keywords` configuration string.
pub const DEFAULT_SENSITIVE_KEYWORDS: &str = "password,token,secret,key";

/// The set of substrings that mark a variable or field name as sensitive.
///
/// Keywords are stored as configured and matched case-insensitively. Iteration
/// follows the lowercased keyword in lexicographic order, which makes the
/// keyword reported for an ambiguous name deterministic.
///
/// # Examples
///
/// ```
/// use logcheck::SensitiveKeywords;
///
/// let keywords = SensitiveKeywords::parse(" password, ,Token ");
/// assert_eq!(keywords.len(), 2);
/// assert!(keywords.iter().any(|kw| kw == "Token"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensitiveKeywords {
    // lowercased keyword -> keyword as configured
    keywords: BTreeMap<String, String>,
}

impl SensitiveKeywords {
    /// Builds the set from individual keywords, trimming each and dropping
    /// empty entries. The first spelling of a case-insensitive duplicate wins.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for kw in keywords {
            let kw = kw.as_ref().trim();
            if !kw.is_empty() {
                map.entry(kw.to_lowercase()).or_insert_with(|| kw.to_string());
            }
        }
        Self { keywords: map }
    }

    /// Parses a comma-separated keyword list.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if no keyword is configured; the leak rule never fires.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterates over keywords as configured.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.values().map(String::as_str)
    }

    /// Iterates over `(lowercased, configured)` pairs in lowercased order.
    pub(crate) fn folded(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
