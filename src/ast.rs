//! Host-facing input model.
//!
//! The host driver parses and type-checks the program, then hands the analyzer
//! one [`ResolvedCall`] per call expression. Only the argument shapes the rules
//! understand are modelled; everything else arrives as [`ArgExpr::Other`].

use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// A byte position in the host's source space.
///
/// Positions are opaque to the analyzer apart from offsetting: a diagnostic
/// inside a literal or identifier is reported at the node position plus a byte
/// offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pos(pub usize);

impl Add<usize> for Pos {
    type Output = Pos;

    fn add(self, offset: usize) -> Pos {
        Pos(self.0 + offset)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The declared type of a method receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverType {
    /// A named type such as `Logger`
    Named(String),
    /// A pointer to another type, e.g. `*Logger`
    Pointer(Box<ReceiverType>),
    /// Anything without a usable name (anonymous structs, interface literals, ...)
    Unnamed,
}

impl ReceiverType {
    /// Shorthand for a pointer to a named type.
    pub fn pointer_to(name: impl Into<String>) -> Self {
        ReceiverType::Pointer(Box::new(ReceiverType::Named(name.into())))
    }

    /// Returns the type name with exactly one pointer level removed.
    ///
    /// `Logger` and `*Logger` both resolve to `"Logger"`; `**Logger` and
    /// unnamed types resolve to `None`.
    pub fn type_name(&self) -> Option<&str> {
        let base = match self {
            ReceiverType::Pointer(inner) => inner.as_ref(),
            other => other,
        };
        match base {
            ReceiverType::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// The statically resolved target of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callee {
    /// Import path of the declaring package; `None` for builtins
    pub package_path: Option<String>,
    /// Receiver type for methods, `None` for free functions
    pub receiver: Option<ReceiverType>,
    /// Simple name of the function or method
    pub name: String,
}

impl Callee {
    /// A free function `name` declared in `package_path`.
    pub fn function(package_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package_path: Some(package_path.into()),
            receiver: None,
            name: name.into(),
        }
    }

    /// A method `name` on `receiver`, declared in `package_path`.
    pub fn method(
        package_path: impl Into<String>,
        receiver: ReceiverType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package_path: Some(package_path.into()),
            receiver: Some(receiver),
            name: name.into(),
        }
    }
}

/// An argument expression, reduced to the shapes the rules inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    /// A string literal token, raw text including its quotes
    StringLiteral {
        /// The token exactly as written, e.g. `"hello\n"`
        raw: String,
        /// Position of the opening quote
        pos: Pos,
    },
    /// A bare identifier such as `password`
    Identifier {
        /// Identifier name
        name: String,
        /// Position of the identifier
        pos: Pos,
    },
    /// A field selector such as `user.Token`; only the field name is kept
    FieldAccess {
        /// Selected field name
        field: String,
        /// Position of the field name (not of the receiver)
        pos: Pos,
    },
    /// `left + right`
    Concatenation(Box<ArgExpr>, Box<ArgExpr>),
    /// Any other expression
    Other,
}

impl ArgExpr {
    /// A string literal from its raw token text.
    pub fn string(raw: impl Into<String>, pos: Pos) -> Self {
        ArgExpr::StringLiteral {
            raw: raw.into(),
            pos,
        }
    }

    /// An identifier reference.
    pub fn ident(name: impl Into<String>, pos: Pos) -> Self {
        ArgExpr::Identifier {
            name: name.into(),
            pos,
        }
    }

    /// A field selector, positioned at the field name.
    pub fn field(field: impl Into<String>, pos: Pos) -> Self {
        ArgExpr::FieldAccess {
            field: field.into(),
            pos,
        }
    }

    /// `left + right`.
    pub fn concat(left: ArgExpr, right: ArgExpr) -> Self {
        ArgExpr::Concatenation(Box::new(left), Box::new(right))
    }
}

/// A call expression as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCall {
    /// Resolved callee, `None` when the host could not resolve it statically
    pub callee: Option<Callee>,
    /// Call arguments in source order
    pub args: Vec<ArgExpr>,
    /// Position of the call expression
    pub pos: Pos,
}

impl ResolvedCall {
    /// A call to a resolved callee.
    pub fn new(callee: Callee, args: Vec<ArgExpr>, pos: Pos) -> Self {
        Self {
            callee: Some(callee),
            args,
            pos,
        }
    }

    /// A call the host could not resolve (e.g. through a function value).
    pub fn unresolved(args: Vec<ArgExpr>, pos: Pos) -> Self {
        Self {
            callee: None,
            args,
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_and_value_receivers_share_a_name() {
        assert_eq!(ReceiverType::Named("Logger".into()).type_name(), Some("Logger"));
        assert_eq!(ReceiverType::pointer_to("Logger").type_name(), Some("Logger"));
    }

    #[test]
    fn only_one_pointer_level_is_unwrapped() {
        let double = ReceiverType::Pointer(Box::new(ReceiverType::pointer_to("Logger")));
        assert_eq!(double.type_name(), None);
        assert_eq!(ReceiverType::Unnamed.type_name(), None);
    }

    #[test]
    fn pos_offsets_by_bytes() {
        assert_eq!(Pos(10) + 3, Pos(13));
        assert_eq!(Pos(7).to_string(), "7");
    }
}
