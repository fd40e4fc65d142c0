//! Registry of watched log calls.
//!
//! Maps a package path to the free functions and `(type, method)` pairs that
//! emit log records, each annotated with the index of the message argument.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Package path of the standard structured logger.
pub const SLOG_PACKAGE: &str = "log/slog";

/// Package path of the zap logging library.
pub const ZAP_PACKAGE: &str = "go.uber.org/zap";

const SLOG_CALLS: &[(&str, usize)] = &[
    ("Debug", 0),
    ("DebugContext", 1),
    ("Info", 0),
    ("InfoContext", 1),
    ("Warn", 0),
    ("WarnContext", 1),
    ("Error", 0),
    ("ErrorContext", 1),
    ("Log", 2),
];

const ZAP_LOGGER_CALLS: &[(&str, usize)] = &[
    ("Debug", 0),
    ("Info", 0),
    ("Warn", 0),
    ("Error", 0),
    ("DPanic", 0),
    ("Panic", 0),
    ("Fatal", 0),
    ("Log", 1),
];

/// Watched functions and methods of a single package.
///
/// Deserializes from the `watched-logs` schema:
/// `{"functions": {"<name>": <index>}, "methods": {"<type>": {"<name>": <index>}}}`.
/// Either table may be omitted or `null`; `Functions` and `Methods` are
/// accepted as alternate spellings of the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WatchedCall {
    /// Free function name -> message argument index
    #[serde(default, alias = "Functions", deserialize_with = "null_as_default")]
    pub functions: HashMap<String, usize>,
    /// Receiver type name -> method name -> message argument index
    #[serde(default, alias = "Methods", deserialize_with = "null_as_default")]
    pub methods: HashMap<String, HashMap<String, usize>>,
}

impl WatchedCall {
    /// Returns the message index of free function `name`.
    pub fn function_index(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    /// Returns the message index of method `name` on type `type_name`.
    pub fn method_index(&self, type_name: &str, name: &str) -> Option<usize> {
        self.methods.get(type_name)?.get(name).copied()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn table(calls: &[(&str, usize)]) -> HashMap<String, usize> {
    calls
        .iter()
        .map(|&(name, index)| (name.to_string(), index))
        .collect()
}

/// The full registry: package path -> [`WatchedCall`].
///
/// # Examples
///
/// ```
/// use logcheck::WatchedLogs;
///
/// let logs = WatchedLogs::with_override(r#"{"mypkg": {"functions": {"Warnf": 0}}}"#);
/// assert_eq!(logs.get("mypkg").and_then(|c| c.function_index("Warnf")), Some(0));
/// assert!(logs.get("log/slog").is_some());
///
/// // Malformed overrides are discarded
/// assert_eq!(WatchedLogs::with_override("{oops"), WatchedLogs::defaults());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedLogs {
    packages: HashMap<String, WatchedCall>,
}

impl WatchedLogs {
    /// Returns an empty registry; nothing is watched.
    pub fn empty() -> Self {
        Self {
            packages: HashMap::new(),
        }
    }

    /// Returns the built-in registry covering `log/slog` and `go.uber.org/zap`.
    pub fn defaults() -> Self {
        let slog = WatchedCall {
            functions: table(SLOG_CALLS),
            methods: HashMap::from([("Logger".to_string(), table(SLOG_CALLS))]),
        };
        let zap = WatchedCall {
            functions: HashMap::new(),
            methods: HashMap::from([("Logger".to_string(), table(ZAP_LOGGER_CALLS))]),
        };

        Self {
            packages: HashMap::from([
                (SLOG_PACKAGE.to_string(), slog),
                (ZAP_PACKAGE.to_string(), zap),
            ]),
        }
    }

    /// Parses a `watched-logs` JSON override.
    ///
    /// A package mapped to `null` parses as an entry that watches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedOverride`] if `json` is not an object of
    /// the registry shape, including negative or fractional indices.
    pub fn parse_override(json: &str) -> Result<HashMap<String, WatchedCall>, ConfigError> {
        let parsed: HashMap<String, Option<WatchedCall>> = serde_json::from_str(json)?;
        Ok(parsed
            .into_iter()
            .map(|(pkg, call)| (pkg, call.unwrap_or_default()))
            .collect())
    }

    /// Builds the defaults and applies `json` on top of them.
    ///
    /// An override entry replaces the default entry of the same package as a
    /// whole. A malformed override is discarded and the defaults are returned
    /// unchanged; the failure is only logged, never returned.
    pub fn with_override(json: &str) -> Self {
        let mut logs = Self::defaults();
        if json.trim().is_empty() {
            return logs;
        }

        match Self::parse_override(json) {
            Ok(overrides) => logs.merge(overrides),
            Err(err) => {
                tracing::warn!(
                    target: "logcheck",
                    error = %err,
                    "ignoring watched-logs override, using built-in registry"
                );
            }
        }
        logs
    }

    /// Inserts every entry of `overrides`, replacing existing packages.
    pub fn merge(&mut self, overrides: HashMap<String, WatchedCall>) {
        self.packages.extend(overrides);
    }

    /// Returns the entry for `package`, if watched.
    pub fn get(&self, package: &str) -> Option<&WatchedCall> {
        self.packages.get(package)
    }

    /// Returns the number of watched packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package is watched.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for WatchedLogs {
    fn default() -> Self {
        Self::defaults()
    }
}
