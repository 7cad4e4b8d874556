//! Built-in type keywords.
//!
//! `BuiltinType` names the intrinsic data types of the language. Their
//! `name()` is the canonical spelling used as a resolved type name whenever
//! a declaration's type comes from a sigil or from the implicit default.

/// Intrinsic data types, spelled as reserved keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinType {
    Boolean,
    Byte,
    Currency,
    Date,
    Decimal,
    Double,
    Integer,
    Long,
    LongLong,
    LongPtr,
    Object,
    Single,
    String,
    Variant,
}

impl BuiltinType {
    /// Type of a declaration with neither an `As` clause nor a type hint.
    pub const IMPLICIT_DEFAULT: BuiltinType = BuiltinType::Variant;

    /// Canonical keyword spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Currency => "Currency",
            Self::Date => "Date",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::LongLong => "LongLong",
            Self::LongPtr => "LongPtr",
            Self::Object => "Object",
            Self::Single => "Single",
            Self::String => "String",
            Self::Variant => "Variant",
        }
    }
}
