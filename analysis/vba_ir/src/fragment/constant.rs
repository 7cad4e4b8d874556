//! Constant declaration statements.

use super::{AsTypeClause, Identifier, TypeHint, VisibilityClause};
use crate::Span;

/// Initializer expression of a constant, kept as source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueExpr {
    pub span: Span,
    pub text: String,
}

impl ValueExpr {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        ValueExpr {
            span,
            text: text.into(),
        }
    }
}

/// One comma-separated entry of a `Const` statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstSubStmt {
    pub span: Span,
    /// Required by the grammar.
    pub identifier: Option<Identifier>,
    pub type_hint: Option<TypeHint>,
    pub as_type: Option<AsTypeClause>,
    pub value: Option<ValueExpr>,
}

impl ConstSubStmt {
    pub fn new(span: Span, identifier: Identifier, value: ValueExpr) -> Self {
        ConstSubStmt {
            span,
            identifier: Some(identifier),
            type_hint: None,
            as_type: None,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn with_type_hint(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }

    #[must_use]
    pub fn with_as_type(mut self, clause: AsTypeClause) -> Self {
        self.as_type = Some(clause);
        self
    }
}

/// `[Public|Private] Const A = 1, B As Long = 2`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstStmt {
    pub span: Span,
    pub visibility: Option<VisibilityClause>,
    pub subs: Vec<ConstSubStmt>,
}

impl ConstStmt {
    pub fn new(span: Span, subs: Vec<ConstSubStmt>) -> Self {
        ConstStmt {
            span,
            visibility: None,
            subs,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: VisibilityClause) -> Self {
        self.visibility = Some(visibility);
        self
    }
}
