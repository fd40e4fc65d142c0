/// Umbrella over [`ConfigError`] and [`LiteralError`] for callers that drive
/// the fallible steps themselves and want a single error type.
///
/// No analyzer operation returns this type. [`WatchedLogs::parse_override`]
/// and [`DecodedLiteral::decode`] return the specific errors, and the analyzer
/// recovers from both by falling back to defaults or skipping the literal.
///
/// [`WatchedLogs::parse_override`]: crate::WatchedLogs::parse_override
/// [`DecodedLiteral::decode`]: crate::DecodedLiteral::decode
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `watched-logs` override could not be parsed
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A string-literal token could not be decoded
    #[error(transparent)]
    Literal(#[from] LiteralError),
}

/// Failure to parse a `watched-logs` override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override is not a JSON object of the expected registry shape
    #[error("malformed watched-logs override: {0}")]
    MalformedOverride(#[from] serde_json::Error),
}

/// Failure to decode the raw text of a string-literal token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// The token is not wrapped in matching `"` or `` ` `` quotes
    #[error("literal is not quoted")]
    Unquoted,
    /// An unescaped quote or newline appears inside the literal
    #[error("unexpected {found:?} at byte {offset}")]
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Byte offset inside the token
        offset: usize,
    },
    /// A backslash is followed by an unknown escape or too few digits
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Byte offset of the backslash inside the token
        offset: usize,
    },
    /// A `\u`, `\U` or octal escape names a value that is not a valid code point
    #[error("escape at byte {offset} is not a valid code point")]
    InvalidCodePoint {
        /// Byte offset of the backslash inside the token
        offset: usize,
    },
}
