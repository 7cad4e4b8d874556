//! Code modules.

use super::{ConstStmt, ProcedureStmt, VariableStmt};
use crate::Span;

/// Declaration-shaped items at module level.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModuleItem {
    Variable(VariableStmt),
    Constant(ConstStmt),
    Procedure(ProcedureStmt),
}

/// One parsed code module: the unit of (re)analysis.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleFragment {
    pub name: String,
    pub span: Span,
    pub items: Vec<ModuleItem>,
}

impl ModuleFragment {
    pub fn new(name: impl Into<String>, span: Span, items: Vec<ModuleItem>) -> Self {
        ModuleFragment {
            name: name.into(),
            span,
            items,
        }
    }
}
