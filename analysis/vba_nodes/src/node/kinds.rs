//! Payloads of the individual node kinds.

use vba_ir::ProcedureKind;

use crate::{Accessibility, ResolvedType};

/// Root of a module's declaration tree. Children are the module's
/// declarations and procedures in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleNode {
    pub name: String,
}

/// A `Sub`, `Function` or `Property` member.
///
/// The node itself lives in the module scope; its children (the local
/// declarations) live in the `Module.Procedure` scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProcedureNode {
    pub name: String,
    pub kind: ProcedureKind,
    pub is_static: bool,
    pub accessibility: Accessibility,
    /// `None` for members that do not return a value.
    pub return_type: Option<ResolvedType>,
}

/// One variable statement. Children are exactly its `VariableNode`s, one per
/// comma-separated entry, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableDeclarationNode {
    /// Introduced by `Dim` or `Static`.
    pub is_local: bool,
    /// Visibility keyword as written, if any.
    pub raw_visibility: Option<String>,
    pub with_events: bool,
}

/// One declared variable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag records an independent fact about the declaration"
)]
pub struct VariableNode {
    /// Identifier as written; never empty.
    pub name: String,
    pub type_name: String,
    pub is_implicitly_typed: bool,
    pub is_using_type_hint: bool,
    pub accessibility: Accessibility,
    pub is_array: bool,
    /// Declared `As New`.
    pub is_new: bool,
}

/// One `Const` statement. Children are its `ConstantNode`s in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstantDeclarationNode {
    /// Declared inside a procedure body.
    pub is_local: bool,
    pub raw_visibility: Option<String>,
}

/// One declared constant.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstantNode {
    pub name: String,
    pub type_name: String,
    pub is_implicitly_typed: bool,
    pub is_using_type_hint: bool,
    pub accessibility: Accessibility,
    /// Initializer expression as written.
    pub value: String,
}
