//! The analyzer: configuration lifecycle and rule evaluation per call.

use std::sync::OnceLock;

use serde_json::Value;

use crate::ast::{ArgExpr, Pos, ResolvedCall};
use crate::config::{AnalyzerConfig, RawConfig};
use crate::diagnostic::{
    CHARSET_MESSAGE, Diagnostic, DiagnosticTrail, LOWERCASE_FIX_MESSAGE, LOWERCASE_MESSAGE,
    Reporter, SuggestedFix, TextEdit, sensitive_leak_message,
};
use crate::extract::{argument_names, message_fragments};
use crate::keywords::SensitiveKeywords;
use crate::literal::DecodedLiteral;
use crate::matcher::message_index;
use crate::rules::{find_sensitive_name, index_illegal_character, starts_with_lowercase};

/// Name under which the analyzer registers with a host driver.
pub const ANALYZER_NAME: &str = "logcheck";

/// One-line description for host registration.
pub const ANALYZER_DOC: &str = "check log messages for log/slog pkg";

/// Log-call analyzer.
///
/// Holds the raw configuration and builds the processed [`AnalyzerConfig`]
/// on first use. Every later call, from any thread, observes that same
/// configuration.
///
/// # Examples
///
/// ```
/// use logcheck::{Analyzer, ArgExpr, Callee, Pos, RawConfig, ResolvedCall};
///
/// let analyzer = Analyzer::new(RawConfig::default());
/// let call = ResolvedCall::new(
///     Callee::function("log/slog", "Info"),
///     vec![ArgExpr::string("\"Starting server\"", Pos(100))],
///     Pos(90),
/// );
///
/// let diagnostics = analyzer.run([&call]);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].pos, Pos(101));
/// assert_eq!(diagnostics[0].fix.as_ref().unwrap().edit.new_text, "s");
/// ```
#[derive(Debug)]
pub struct Analyzer {
    raw: RawConfig,
    config: OnceLock<AnalyzerConfig>,
}

impl Analyzer {
    /// Creates an analyzer that will build its configuration from `raw`.
    pub fn new(raw: RawConfig) -> Self {
        Self {
            raw,
            config: OnceLock::new(),
        }
    }

    /// Creates an analyzer from a host settings object.
    ///
    /// See [`RawConfig::from_settings`].
    pub fn from_settings(settings: &Value) -> Self {
        Self::new(RawConfig::from_settings(settings))
    }

    /// Creates an analyzer around an already built configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            raw: RawConfig::default(),
            config: OnceLock::from(config),
        }
    }

    /// Returns the registration name.
    pub fn name(&self) -> &'static str {
        ANALYZER_NAME
    }

    /// Returns the registration description.
    pub fn doc(&self) -> &'static str {
        ANALYZER_DOC
    }

    /// Returns the configuration, building it on first use.
    pub fn config(&self) -> &AnalyzerConfig {
        self.config.get_or_init(|| AnalyzerConfig::from_raw(&self.raw))
    }

    /// Analyzes every call of one compilation unit and returns the
    /// diagnostics in emission order.
    pub fn run<'a, I>(&self, calls: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'a ResolvedCall>,
    {
        let trail = DiagnosticTrail::new();
        self.run_with(calls, &trail);
        trail.into_vec()
    }

    /// Like [`run`](Self::run) but streams diagnostics into `reporter`.
    pub fn run_with<'a, I, R>(&self, calls: I, reporter: &R)
    where
        I: IntoIterator<Item = &'a ResolvedCall>,
        R: Reporter + ?Sized,
    {
        let config = self.config();
        let mut count = 0;
        for call in calls {
            check_call(config, call, reporter);
            count += 1;
        }
        tracing::debug!(target: "logcheck", calls = count, "compilation unit analyzed");
    }

    /// Analyzes a single call.
    pub fn check_call<R>(&self, call: &ResolvedCall, reporter: &R)
    where
        R: Reporter + ?Sized,
    {
        check_call(self.config(), call, reporter);
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RawConfig::default())
    }
}

/// Evaluates all rules against one call.
///
/// Message rules run on the string-literal fragments of the message
/// argument; the leak rule runs on the message argument and every argument
/// after it. Calls that are not watched produce nothing.
pub fn check_call<R>(config: &AnalyzerConfig, call: &ResolvedCall, reporter: &R)
where
    R: Reporter + ?Sized,
{
    let Some(index) = message_index(call, &config.watched_logs) else {
        return;
    };

    for fragment in message_fragments(&call.args[index]) {
        check_message(fragment.raw, fragment.pos, reporter);
    }

    for arg in &call.args[index..] {
        check_argument(arg, &config.sensitive_keywords, reporter);
    }
}

/// Applies the casing and charset rules to one literal.
fn check_message<R>(raw: &str, pos: Pos, reporter: &R)
where
    R: Reporter + ?Sized,
{
    let literal = match DecodedLiteral::decode(raw) {
        Ok(literal) => literal,
        Err(err) => {
            tracing::debug!(target: "logcheck", %pos, error = %err, "skipping undecodable literal");
            return;
        }
    };
    let Some(first) = literal.first() else {
        return;
    };

    if !starts_with_lowercase(&literal.text()) {
        let at = pos + first.span.start;
        let mut diagnostic = Diagnostic::new(at, LOWERCASE_MESSAGE);
        if first.value.is_ascii_uppercase() {
            diagnostic = diagnostic.with_fix(SuggestedFix {
                message: LOWERCASE_FIX_MESSAGE.to_string(),
                edit: TextEdit {
                    start: at,
                    end: pos + first.span.end,
                    new_text: first.value.to_ascii_lowercase().to_string(),
                },
            });
        }
        reporter.report(diagnostic);
    }

    let chars = literal.chars();
    if let Some(i) = index_illegal_character(chars.iter().map(|c| c.value)) {
        reporter.report(Diagnostic::new(pos + chars[i].span.start, CHARSET_MESSAGE));
    }
}

/// Applies the leak rule to the names inside one argument.
fn check_argument<R>(arg: &ArgExpr, keywords: &SensitiveKeywords, reporter: &R)
where
    R: Reporter + ?Sized,
{
    for name in argument_names(arg) {
        if let Some(found) = find_sensitive_name(name.name, keywords) {
            reporter.report(Diagnostic::new(
                name.pos + found.index,
                sensitive_leak_message(found.keyword),
            ));
        }
    }
}
