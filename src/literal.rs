//! Decoding of raw string-literal tokens.
//!
//! Rules are checked against the decoded text, but diagnostics must land on
//! the source bytes. Every decoded character therefore keeps the byte span it
//! occupies inside the raw token, so `\x41` or `é` map back to the whole
//! escape sequence rather than to a shifted offset.

use std::ops::Range;

use crate::error::LiteralError;

/// One decoded character and where it was written in the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedChar {
    /// The decoded value
    pub value: char,
    /// Byte span inside the raw token, opening quote at offset 0
    pub span: Range<usize>,
}

/// The decoded contents of a string-literal token.
///
/// Interpreted literals (`"..."`) resolve the usual backslash escapes:
/// `\a \b \f \n \r \t \v \\ \"`, three-digit octal, `\xhh`, `\uhhhh` and
/// `\Uhhhhhhhh`. Raw literals (`` `...` ``) are taken verbatim except that
/// carriage returns are dropped. Byte escapes above `0x7f` decode to the
/// Latin-1 character of the same value.
///
/// # Examples
///
/// ```
/// use logcheck::DecodedLiteral;
///
/// let lit = DecodedLiteral::decode(r#""a\tb""#).unwrap();
/// assert_eq!(lit.text(), "a\tb");
/// assert_eq!(lit.chars()[2].span, 4..5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLiteral {
    chars: Vec<DecodedChar>,
}

impl DecodedLiteral {
    /// Decodes a raw token, quotes included.
    ///
    /// # Errors
    ///
    /// Returns [`LiteralError`] when the token is not a well-formed string
    /// literal.
    pub fn decode(raw: &str) -> Result<Self, LiteralError> {
        let bytes = raw.as_bytes();
        let quote = match bytes.first() {
            Some(&q @ (b'"' | b'`')) => q,
            _ => return Err(LiteralError::Unquoted),
        };
        if bytes.len() < 2 || bytes[bytes.len() - 1] != quote {
            return Err(LiteralError::Unquoted);
        }

        // Both quote characters are single ASCII bytes, so slicing is safe.
        let body = &raw[1..raw.len() - 1];
        let chars = if quote == b'"' {
            decode_interpreted(body)?
        } else {
            decode_raw(body)?
        };
        Ok(Self { chars })
    }

    /// Returns the decoded characters with their source spans.
    pub fn chars(&self) -> &[DecodedChar] {
        &self.chars
    }

    /// Returns the first decoded character, if any.
    pub fn first(&self) -> Option<&DecodedChar> {
        self.chars.first()
    }

    /// Returns true if the literal decodes to the empty string.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the number of decoded characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns the decoded text.
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.value).collect()
    }
}

fn decode_raw(body: &str) -> Result<Vec<DecodedChar>, LiteralError> {
    let mut chars = Vec::with_capacity(body.len());
    for (i, c) in body.char_indices() {
        let start = i + 1;
        match c {
            '`' => return Err(LiteralError::UnexpectedChar { found: c, offset: start }),
            '\r' => continue,
            _ => chars.push(DecodedChar {
                value: c,
                span: start..start + c.len_utf8(),
            }),
        }
    }
    Ok(chars)
}

fn decode_interpreted(body: &str) -> Result<Vec<DecodedChar>, LiteralError> {
    let mut chars = Vec::with_capacity(body.len());
    let mut i = 0;
    while let Some(c) = body[i..].chars().next() {
        let start = i + 1;
        match c {
            '"' | '\n' => return Err(LiteralError::UnexpectedChar { found: c, offset: start }),
            '\\' => {
                let (value, len) = decode_escape(&body.as_bytes()[i..], start)?;
                chars.push(DecodedChar {
                    value,
                    span: start..start + len,
                });
                i += len;
            }
            _ => {
                chars.push(DecodedChar {
                    value: c,
                    span: start..start + c.len_utf8(),
                });
                i += c.len_utf8();
            }
        }
    }
    Ok(chars)
}

/// Decodes the escape sequence at the start of `esc`, returning the value and
/// the number of source bytes consumed.
fn decode_escape(esc: &[u8], offset: usize) -> Result<(char, usize), LiteralError> {
    let invalid = LiteralError::InvalidEscape { offset };
    let Some(&kind) = esc.get(1) else {
        return Err(invalid);
    };

    let simple = match kind {
        b'a' => Some('\u{07}'),
        b'b' => Some('\u{08}'),
        b'f' => Some('\u{0c}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'v' => Some('\u{0b}'),
        b'\\' => Some('\\'),
        b'"' => Some('"'),
        _ => None,
    };
    if let Some(value) = simple {
        return Ok((value, 2));
    }

    let (radix, first, end) = match kind {
        b'x' => (16, 2, 4),
        b'u' => (16, 2, 6),
        b'U' => (16, 2, 10),
        b'0'..=b'7' => (8, 1, 4),
        _ => return Err(invalid),
    };
    let digits = esc.get(first..end).ok_or_else(|| invalid.clone())?;
    let mut value: u32 = 0;
    for &d in digits {
        let digit = char::from(d).to_digit(radix).ok_or_else(|| invalid.clone())?;
        value = value * radix + digit;
    }

    let decoded = match kind {
        b'u' | b'U' => char::from_u32(value),
        _ => u8::try_from(value).ok().map(char::from),
    };
    decoded
        .map(|c| (c, end))
        .ok_or(LiteralError::InvalidCodePoint { offset })
}
