//! Procedure members and their local declarations.

use super::{AsTypeClause, ConstStmt, Identifier, TypeHint, VariableStmt, VisibilityClause};
use crate::Span;

/// Kind of procedure member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProcedureKind {
    Sub,
    Function,
    PropertyGet,
    PropertyLet,
    PropertySet,
}

impl ProcedureKind {
    /// Whether the member produces a value and therefore has a return type.
    pub const fn returns_value(self) -> bool {
        matches!(self, ProcedureKind::Function | ProcedureKind::PropertyGet)
    }
}

/// Declaration statements that may appear inside a procedure body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProcedureItem {
    Variable(VariableStmt),
    Constant(ConstStmt),
}

/// A `Sub`, `Function` or `Property` member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProcedureStmt {
    pub span: Span,
    pub kind: ProcedureKind,
    pub visibility: Option<VisibilityClause>,
    /// `Static Sub ...`: all locals retain their values between calls.
    pub is_static: bool,
    /// Required by the grammar.
    pub identifier: Option<Identifier>,
    pub type_hint: Option<TypeHint>,
    pub as_type: Option<AsTypeClause>,
    /// Declaration statements of the body, in source order.
    pub body: Vec<ProcedureItem>,
}

impl ProcedureStmt {
    pub fn new(span: Span, kind: ProcedureKind, identifier: Identifier) -> Self {
        ProcedureStmt {
            span,
            kind,
            visibility: None,
            is_static: false,
            identifier: Some(identifier),
            type_hint: None,
            as_type: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: VisibilityClause) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_as_type(mut self, clause: AsTypeClause) -> Self {
        self.as_type = Some(clause);
        self
    }

    #[must_use]
    pub fn with_type_hint(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<ProcedureItem>) -> Self {
        self.body = body;
        self
    }
}
