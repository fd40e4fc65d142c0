//! Diagnostic records and the reporting seam.

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

use crate::ast::Pos;

/// Message of the casing rule.
pub const LOWERCASE_MESSAGE: &str = "log message should start with a lowercase letter";

/// Message of the charset rule.
pub const CHARSET_MESSAGE: &str =
    "log message should only contain english letters, numbers and spaces";

/// Label of the casing fix.
pub const LOWERCASE_FIX_MESSAGE: &str = "lowercase the first letter";

/// Returns the leak message for `keyword`.
pub fn sensitive_leak_message(keyword: &str) -> String {
    format!("potential sensitive data leak: argument contains '{keyword}'")
}

/// A single replacement of the source range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    /// First replaced byte
    pub start: Pos,
    /// One past the last replaced byte
    pub end: Pos,
    /// Replacement text
    pub new_text: String,
}

/// An automatic fix attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedFix {
    /// Short description of the fix
    pub message: String,
    /// The edit to apply
    pub edit: TextEdit,
}

/// A finding at a source position.
///
/// Diagnostics are immutable once built; the host decides how to render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Where the finding is reported
    pub pos: Pos,
    /// Human-readable message
    pub message: String,
    /// Optional single-edit fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<SuggestedFix>,
}

impl Diagnostic {
    /// Creates a diagnostic without a fix.
    pub fn new(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
            fix: None,
        }
    }

    /// Attaches a fix.
    pub fn with_fix(mut self, fix: SuggestedFix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message)
    }
}

/// Receives diagnostics as the analyzer produces them.
pub trait Reporter {
    /// Accepts one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// In-memory collector of diagnostics, in emission order.
///
/// # Example
///
/// ```
/// use logcheck::{Diagnostic, DiagnosticTrail, Pos, Reporter};
///
/// let trail = DiagnosticTrail::new();
/// trail.report(Diagnostic::new(Pos(3), "something"));
///
/// assert_eq!(trail.len(), 1);
/// assert_eq!(trail.into_vec()[0].pos, Pos(3));
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticTrail {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Returns a snapshot of the collected diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consumes the trail and returns the collected diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Reporter for DiagnosticTrail {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
