//! Declaration-shaped syntax fragments.
//!
//! These mirror the grammar rules for declaration statements. Each fragment
//! carries the `Span` it was parsed from; the declaration model keeps that
//! span as the back-reference for navigation and diagnostics.
//!
//! # Module Structure
//!
//! - `variable`: `Dim` / `Static` / visibility-introduced variable statements
//! - `constant`: `Const` statements
//! - `procedure`: `Sub`, `Function` and `Property` members with their bodies
//! - `module`: a whole code module, the unit of (re)analysis

mod constant;
mod module;
mod procedure;
mod variable;

pub use constant::{ConstStmt, ConstSubStmt, ValueExpr};
pub use module::{ModuleFragment, ModuleItem};
pub use procedure::{ProcedureItem, ProcedureKind, ProcedureStmt};
pub use variable::{LocalKeyword, Subscripts, VariableStmt, VariableSubStmt};

use crate::Span;

/// An identifier as written, without any trailing type hint.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub span: Span,
    pub text: String,
}

impl Identifier {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Identifier {
            span,
            text: text.into(),
        }
    }
}

/// A type-hint sigil trailing an identifier (`name$`).
///
/// The text is kept exactly as the parser produced it; mapping it to a
/// type is the resolver's job.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeHint {
    pub span: Span,
    pub text: String,
}

impl TypeHint {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        TypeHint {
            span,
            text: text.into(),
        }
    }

    /// The sigil character, if the hint is exactly one character long.
    pub fn sigil(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// The type named by an `As` clause (`Long`, `Scripting.Dictionary`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeName {
    pub span: Span,
    pub text: String,
}

impl TypeName {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        TypeName {
            span,
            text: text.into(),
        }
    }
}

/// An explicit `As [New] Type` clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AsTypeClause {
    pub span: Span,
    /// `As New Type` (auto-instantiating object variable).
    pub is_new: bool,
    /// Required by the grammar.
    pub type_name: Option<TypeName>,
}

impl AsTypeClause {
    pub fn new(span: Span, type_name: TypeName) -> Self {
        AsTypeClause {
            span,
            is_new: false,
            type_name: Some(type_name),
        }
    }

    #[must_use]
    pub fn with_new(mut self) -> Self {
        self.is_new = true;
        self
    }
}

/// A visibility keyword (`Public`, `Private`, `Friend`, `Global`) as written.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VisibilityClause {
    pub span: Span,
    pub text: String,
}

impl VisibilityClause {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        VisibilityClause {
            span,
            text: text.into(),
        }
    }
}
