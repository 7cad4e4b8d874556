//! VBA IR - declaration fragments handed over by the parser
//!
//! This crate is the input boundary of the declaration model:
//! - Spans for source locations
//! - `Scope` identifiers (`Module` or `Module.Procedure`)
//! - Declaration-shaped syntax fragments (variables, constants, procedures)
//! - The built-in type keywords and the type-hint sigil table
//!
//! Fragments are produced by the grammar and are assumed to be well-formed
//! where the grammar guarantees it. Sub-fragments the grammar marks as
//! required are still modelled as `Option` so that a broken parser contract
//! surfaces as an error downstream instead of a panic.

mod builtin_type;
pub mod fragment;
mod scope;
mod span;
mod type_hint;

pub use builtin_type::BuiltinType;
pub use fragment::{
    AsTypeClause, ConstStmt, ConstSubStmt, Identifier, LocalKeyword, ModuleFragment, ModuleItem,
    ProcedureItem, ProcedureKind, ProcedureStmt, Subscripts, TypeHint, TypeName, ValueExpr,
    VariableStmt, VariableSubStmt, VisibilityClause,
};
pub use scope::Scope;
pub use span::Span;
pub use type_hint::{builtin_for_hint, TYPE_HINTS};
