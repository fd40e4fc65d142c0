//! Log-call analyzer for structured logging.
//!
//! Given call expressions already parsed and type-checked by a host driver,
//! this crate recognizes calls to watched logging functions and checks them:
//! - **Casing**: a log message starts with a lowercase letter (with an
//!   automatic fix for uppercase ASCII letters)
//! - **Charset**: a log message contains only English letters, digits and spaces
//! - **Sensitive data**: no argument is a variable or field whose name
//!   contains a sensitive keyword such as `password` or `token`
//!
//! # Core Types
//!
//! - [`Analyzer`]: Entry point, owns the once-built configuration
//! - [`ResolvedCall`] / [`ArgExpr`]: Input model supplied by the host
//! - [`WatchedLogs`]: Registry of watched packages, functions and methods
//! - [`SensitiveKeywords`]: Keyword set driving the leak rule
//! - [`Diagnostic`]: Output record with an optional [`SuggestedFix`]
//!
//! # Examples
//!
//! ```
//! use logcheck::{Analyzer, ArgExpr, Callee, Pos, RawConfig, ReceiverType, ResolvedCall};
//!
//! let analyzer = Analyzer::new(RawConfig::default());
//!
//! // logger.Debug("auth", u.Token)
//! let call = ResolvedCall::new(
//!     Callee::method("go.uber.org/zap", ReceiverType::pointer_to("Logger"), "Debug"),
//!     vec![
//!         ArgExpr::string("\"auth\"", Pos(13)),
//!         ArgExpr::field("Token", Pos(23)),
//!     ],
//!     Pos(0),
//! );
//!
//! let diagnostics = analyzer.run([&call]);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     "potential sensitive data leak: argument contains 'token'"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod ast;
mod config;
mod diagnostic;
mod error;
pub mod extract;
mod keywords;
mod literal;
mod matcher;
mod registry;
pub mod rules;

pub use analyzer::{ANALYZER_DOC, ANALYZER_NAME, Analyzer, check_call};
pub use ast::{ArgExpr, Callee, Pos, ReceiverType, ResolvedCall};
pub use config::{AnalyzerConfig, RawConfig, SENSITIVE_KEYWORDS_KEY, WATCHED_LOGS_KEY};
pub use diagnostic::{
    CHARSET_MESSAGE, Diagnostic, DiagnosticTrail, LOWERCASE_FIX_MESSAGE, LOWERCASE_MESSAGE,
    Reporter, SuggestedFix, TextEdit, sensitive_leak_message,
};
pub use error::{ConfigError, Error, LiteralError};
pub use keywords::{DEFAULT_SENSITIVE_KEYWORDS, SensitiveKeywords};
pub use literal::{DecodedChar, DecodedLiteral};
pub use matcher::message_index;
pub use registry::{SLOG_PACKAGE, WatchedCall, WatchedLogs, ZAP_PACKAGE};
