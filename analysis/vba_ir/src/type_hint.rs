//! Type-hint sigil table.
//!
//! A trailing sigil on an identifier (`count%`, `name$`) declares its type
//! when no `As` clause is written. The set of sigils is closed; the grammar
//! only accepts these six.

use crate::BuiltinType;

/// Sigil to built-in type mapping.
///
/// A `const` table: no initialization order, no locking, safe to read from
/// any number of concurrent module builds.
pub const TYPE_HINTS: [(char, BuiltinType); 6] = [
    ('%', BuiltinType::Integer),
    ('&', BuiltinType::Long),
    ('@', BuiltinType::Decimal),
    ('!', BuiltinType::Single),
    ('#', BuiltinType::Double),
    ('$', BuiltinType::String),
];

/// Map a type-hint sigil to its built-in type through `TYPE_HINTS`.
///
/// Returns `None` for any character outside the closed sigil set.
#[must_use]
pub fn builtin_for_hint(sigil: char) -> Option<BuiltinType> {
    TYPE_HINTS
        .iter()
        .find(|&&(known, _)| known == sigil)
        .map(|&(_, builtin)| builtin)
}

#[cfg(test)]
mod tests;
