//! Traversal of argument expressions.
//!
//! Only `+` concatenations are descended into; every other shape is a leaf.

use crate::ast::{ArgExpr, Pos};

/// A string-literal leaf of a message argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFragment<'a> {
    /// Raw token text, quotes included
    pub raw: &'a str,
    /// Position of the opening quote
    pub pos: Pos,
}

/// A named leaf of an argument: an identifier or a selected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentName<'a> {
    /// Identifier or field name
    pub name: &'a str,
    /// Position of the name
    pub pos: Pos,
}

/// Collects the string-literal fragments of a message, left to right.
///
/// Identifiers and other non-literal leaves carry no message text and are
/// skipped.
pub fn message_fragments(expr: &ArgExpr) -> Vec<MessageFragment<'_>> {
    let mut fragments = Vec::new();
    collect_fragments(expr, &mut fragments);
    fragments
}

fn collect_fragments<'a>(expr: &'a ArgExpr, out: &mut Vec<MessageFragment<'a>>) {
    match expr {
        ArgExpr::StringLiteral { raw, pos } => out.push(MessageFragment { raw, pos: *pos }),
        ArgExpr::Concatenation(left, right) => {
            collect_fragments(left, out);
            collect_fragments(right, out);
        }
        ArgExpr::Identifier { .. } | ArgExpr::FieldAccess { .. } | ArgExpr::Other => {}
    }
}

/// Collects identifier and field names of an argument, left to right.
///
/// For a field selector only the field name counts; literal text never does.
pub fn argument_names(expr: &ArgExpr) -> Vec<ArgumentName<'_>> {
    let mut names = Vec::new();
    collect_names(expr, &mut names);
    names
}

fn collect_names<'a>(expr: &'a ArgExpr, out: &mut Vec<ArgumentName<'a>>) {
    match expr {
        ArgExpr::Identifier { name, pos } => out.push(ArgumentName { name, pos: *pos }),
        ArgExpr::FieldAccess { field, pos } => out.push(ArgumentName { name: field, pos: *pos }),
        ArgExpr::Concatenation(left, right) => {
            collect_names(left, out);
            collect_names(right, out);
        }
        ArgExpr::StringLiteral { .. } | ArgExpr::Other => {}
    }
}
