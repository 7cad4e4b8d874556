//! Accessibility of declared symbols.
//!
//! Locality overrides everything: a declaration introduced by `Dim` or
//! `Static` is `Private` no matter what visibility text the fragment
//! carries. Otherwise the written keyword is mapped through a fixed table,
//! and a missing keyword takes the configured default.

use std::fmt;

use vba_ir::VisibilityClause;

use crate::BuildError;

/// Visibility of a declared symbol outside its declaring scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Accessibility {
    Private,
    Public,
    Friend,
    Global,
}

impl Accessibility {
    /// Map a visibility keyword to its accessibility, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [
            Accessibility::Private,
            Accessibility::Public,
            Accessibility::Friend,
            Accessibility::Global,
        ]
        .into_iter()
        .find(|a| a.as_str().eq_ignore_ascii_case(keyword))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Accessibility::Private => "Private",
            Accessibility::Public => "Public",
            Accessibility::Friend => "Friend",
            Accessibility::Global => "Global",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the effective accessibility of a declaration.
///
/// `default` applies only to non-local declarations with no keyword.
pub fn resolve_accessibility(
    is_local: bool,
    visibility: Option<&VisibilityClause>,
    default: Accessibility,
) -> Result<Accessibility, BuildError> {
    if is_local {
        return Ok(Accessibility::Private);
    }
    let Some(clause) = visibility else {
        return Ok(default);
    };
    Accessibility::from_keyword(clause.text.trim()).ok_or_else(|| {
        BuildError::UnmappedVisibility {
            keyword: clause.text.clone(),
            span: clause.span,
        }
    })
}

#[cfg(test)]
mod tests;
