//! Analyzer configuration.
//!
//! [`RawConfig`] carries the two configuration strings exactly as the host
//! supplied them. [`AnalyzerConfig::from_raw`] turns them into the immutable
//! registry and keyword set that every call evaluation reads.

use serde_json::Value;

use crate::keywords::{DEFAULT_SENSITIVE_KEYWORDS, SensitiveKeywords};
use crate::registry::WatchedLogs;

/// Settings key holding the comma-separated keyword list.
pub const SENSITIVE_KEYWORDS_KEY: &str = "sensitive-keywords";

/// Settings key holding the JSON registry override.
pub const WATCHED_LOGS_KEY: &str = "watched-logs";

/// Unprocessed configuration strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfig {
    /// Comma-separated sensitive keywords
    pub sensitive_keywords: String,
    /// JSON registry override, empty for the built-in registry
    pub watched_logs: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            sensitive_keywords: DEFAULT_SENSITIVE_KEYWORDS.to_string(),
            watched_logs: String::new(),
        }
    }
}

impl RawConfig {
    /// Reads the settings object a host plugin loader passes in.
    ///
    /// String values under [`SENSITIVE_KEYWORDS_KEY`] and [`WATCHED_LOGS_KEY`]
    /// replace the defaults. Anything else, including a settings value that is
    /// not an object, is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use logcheck::RawConfig;
    /// use serde_json::json;
    ///
    /// let raw = RawConfig::from_settings(&json!({ "sensitive-keywords": "pin,ssn" }));
    /// assert_eq!(raw.sensitive_keywords, "pin,ssn");
    /// assert!(raw.watched_logs.is_empty());
    /// ```
    pub fn from_settings(settings: &Value) -> Self {
        let mut raw = Self::default();
        let Some(settings) = settings.as_object() else {
            return raw;
        };

        if let Some(keywords) = settings.get(SENSITIVE_KEYWORDS_KEY).and_then(Value::as_str) {
            raw.sensitive_keywords = keywords.to_string();
        }
        if let Some(watched) = settings.get(WATCHED_LOGS_KEY).and_then(Value::as_str) {
            raw.watched_logs = watched.to_string();
        }
        raw
    }
}

/// Processed, read-only configuration shared by all call evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Substrings that mark argument names as sensitive
    pub sensitive_keywords: SensitiveKeywords,
    /// Watched log calls
    pub watched_logs: WatchedLogs,
}

impl AnalyzerConfig {
    /// Builds the configuration from raw strings.
    ///
    /// Never fails: a malformed registry override degrades to the built-in
    /// registry.
    pub fn from_raw(raw: &RawConfig) -> Self {
        let config = Self {
            sensitive_keywords: SensitiveKeywords::parse(&raw.sensitive_keywords),
            watched_logs: WatchedLogs::with_override(&raw.watched_logs),
        };
        tracing::debug!(
            target: "logcheck",
            keywords = config.sensitive_keywords.len(),
            packages = config.watched_logs.len(),
            "analyzer configuration built"
        );
        config
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::from_raw(&RawConfig::default())
    }
}
