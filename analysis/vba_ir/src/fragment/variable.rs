//! Variable declaration statements.

use super::{AsTypeClause, Identifier, TypeHint, VisibilityClause};
use crate::Span;

/// Keyword introducing a local variable declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LocalKeyword {
    Dim,
    Static,
}

/// Array bounds following an identifier (`a(1 To 10)`, `b()`).
///
/// The bounds themselves are expressions and are not interpreted here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Subscripts {
    pub span: Span,
}

/// One comma-separated entry of a variable statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableSubStmt {
    pub span: Span,
    /// Required by the grammar.
    pub identifier: Option<Identifier>,
    pub subscripts: Option<Subscripts>,
    pub type_hint: Option<TypeHint>,
    pub as_type: Option<AsTypeClause>,
}

impl VariableSubStmt {
    pub fn new(span: Span, identifier: Identifier) -> Self {
        VariableSubStmt {
            span,
            identifier: Some(identifier),
            subscripts: None,
            type_hint: None,
            as_type: None,
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

    #[must_use]
    pub fn with_subscripts(mut self, subscripts: Subscripts) -> Self {
        self.subscripts = Some(subscripts);
        self
    }
}

/// A whole variable statement: `Dim a, b$, c As String`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableStmt {
    pub span: Span,
    pub visibility: Option<VisibilityClause>,
    /// `Dim` or `Static`; `None` when a visibility keyword introduces the
    /// statement.
    pub local_keyword: Option<LocalKeyword>,
    pub with_events: bool,
    pub subs: Vec<VariableSubStmt>,
}

impl VariableStmt {
    /// Statement introduced by a local-declaration keyword.
    pub fn local(span: Span, keyword: LocalKeyword, subs: Vec<VariableSubStmt>) -> Self {
        VariableStmt {
            span,
            visibility: None,
            local_keyword: Some(keyword),
            with_events: false,
            subs,
        }
    }

    /// Statement introduced by a visibility keyword.
    pub fn with_visibility(
        span: Span,
        visibility: VisibilityClause,
        subs: Vec<VariableSubStmt>,
    ) -> Self {
        VariableStmt {
            span,
            visibility: Some(visibility),
            local_keyword: None,
            with_events: false,
            subs,
        }
    }

    /// Whether the statement is introduced by `Dim` or `Static`.
    pub fn is_local(&self) -> bool {
        self.local_keyword.is_some()
    }
}
