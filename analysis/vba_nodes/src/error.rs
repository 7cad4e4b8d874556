//! Node-building errors.
//!
//! Every variant means the parser handed over a fragment that breaks its
//! own grammar contract. None of them is caused by user code the grammar
//! accepted, so builders fail fast and the project pass excludes the module.

use vba_diagnostic::{Diagnostic, ErrorCode};
use vba_ir::Span;

/// Kind of sub-fragment a builder requires.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FragmentKind {
    /// The identifier of a variable, constant or procedure.
    Identifier,
    /// The type named by an `As` clause.
    TypeName,
    /// The initializer of a constant.
    ConstantValue,
}

impl FragmentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Identifier => "identifier",
            FragmentKind::TypeName => "type name",
            FragmentKind::ConstantValue => "constant value",
        }
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to build a declaration node from a fragment.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum BuildError {
    /// A required sub-fragment is absent (structural integrity violation).
    #[error("declaration fragment at {span} is missing its {fragment}")]
    MissingFragment { fragment: FragmentKind, span: Span },

    /// A type-hint sigil outside the closed sigil set.
    #[error("unknown type hint `{hint}` at {span}")]
    UnmappedTypeHint { hint: String, span: Span },

    /// A visibility keyword outside the fixed keyword table.
    #[error("unknown visibility keyword `{keyword}` at {span}")]
    UnmappedVisibility { keyword: String, span: Span },
}

impl BuildError {
    pub fn missing(fragment: FragmentKind, span: Span) -> Self {
        BuildError::MissingFragment { fragment, span }
    }

    /// Span of the offending fragment.
    pub fn span(&self) -> Span {
        match self {
            BuildError::MissingFragment { span, .. }
            | BuildError::UnmappedTypeHint { span, .. }
            | BuildError::UnmappedVisibility { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::MissingFragment { .. } => ErrorCode::E0001,
            BuildError::UnmappedTypeHint { .. } => ErrorCode::E0002,
            BuildError::UnmappedVisibility { .. } => ErrorCode::E0003,
        }
    }

    /// Convert to a diagnostic for the host to surface.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            BuildError::MissingFragment { fragment, span } => diag
                .with_label(*span, format!("expected {fragment} here"))
                .with_note("the parser accepted a declaration without a required part"),
            BuildError::UnmappedTypeHint { span, .. } => diag
                .with_label(*span, "not one of `% & @ ! # $`")
                .with_note("the grammar should only produce known type hints"),
            BuildError::UnmappedVisibility { span, .. } => diag
                .with_label(*span, "not one of Public, Private, Friend, Global")
                .with_note("the grammar should only produce known visibility keywords"),
        }
    }
}
