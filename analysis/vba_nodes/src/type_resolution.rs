//! Declared-type resolution.
//!
//! Exactly one source determines a declaration's type, checked in order:
//! 1. An explicit `As` clause: its type name, verbatim.
//! 2. A type-hint sigil: the mapped built-in type.
//! 3. Neither: the implicit default, `Variant`.

use vba_ir::{builtin_for_hint, AsTypeClause, BuiltinType, TypeHint};

use crate::{BuildError, FragmentKind};

/// A declaration's resolved type and how it was determined.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedType {
    /// Canonical type name.
    pub name: String,
    /// Neither an `As` clause nor a sigil was present.
    pub is_implicitly_typed: bool,
    /// A sigil, not an `As` clause, determined the type.
    pub is_using_type_hint: bool,
}

impl ResolvedType {
    fn explicit(name: &str) -> Self {
        ResolvedType {
            name: name.to_string(),
            is_implicitly_typed: false,
            is_using_type_hint: false,
        }
    }

    fn hinted(builtin: BuiltinType) -> Self {
        ResolvedType {
            name: builtin.name().to_string(),
            is_implicitly_typed: false,
            is_using_type_hint: true,
        }
    }

    fn implicit() -> Self {
        ResolvedType {
            name: BuiltinType::IMPLICIT_DEFAULT.name().to_string(),
            is_implicitly_typed: true,
            is_using_type_hint: false,
        }
    }
}

/// Resolve a declaration's type from its `As` clause and type hint.
///
/// An `As` clause wins over a type hint when both are present.
pub fn resolve_type(
    as_type: Option<&AsTypeClause>,
    type_hint: Option<&TypeHint>,
) -> Result<ResolvedType, BuildError> {
    if let Some(clause) = as_type {
        let type_name = clause
            .type_name
            .as_ref()
            .ok_or_else(|| BuildError::missing(FragmentKind::TypeName, clause.span))?;
        return Ok(ResolvedType::explicit(&type_name.text));
    }

    if let Some(hint) = type_hint {
        let builtin = hint.sigil().and_then(builtin_for_hint).ok_or_else(|| {
            BuildError::UnmappedTypeHint {
                hint: hint.text.clone(),
                span: hint.span,
            }
        })?;
        return Ok(ResolvedType::hinted(builtin));
    }

    Ok(ResolvedType::implicit())
}
