//! Read-only traversal of declaration trees.
//!
//! Consumers implement `Visitor` and override the hooks for the kinds they
//! care about. Every hook defaults to `walk_node`, which visits the children
//! in order. The tree itself is never mutated; state lives in the visitor.
//!
//! # Example
//!
//! ```text
//! struct ImplicitVariants(Vec<String>);
//!
//! impl<'n> Visitor<'n> for ImplicitVariants {
//!     fn visit_variable(&mut self, node: &'n Node, variable: &'n VariableNode) {
//!         if variable.is_implicitly_typed {
//!             self.0.push(format!("{}.{}", node.scope(), variable.name));
//!         }
//!     }
//! }
//! ```

use crate::{
    ConstantDeclarationNode, ConstantNode, ModuleNode, Node, NodeKind, ProcedureNode,
    VariableDeclarationNode, VariableNode,
};

pub trait Visitor<'n> {
    /// Dispatch on the node's kind.
    fn visit_node(&mut self, node: &'n Node) {
        match node.kind() {
            NodeKind::Module(m) => self.visit_module(node, m),
            NodeKind::Procedure(p) => self.visit_procedure(node, p),
            NodeKind::VariableDeclaration(d) => self.visit_variable_declaration(node, d),
            NodeKind::Variable(v) => self.visit_variable(node, v),
            NodeKind::ConstantDeclaration(d) => self.visit_constant_declaration(node, d),
            NodeKind::Constant(c) => self.visit_constant(node, c),
        }
    }

    fn visit_module(&mut self, node: &'n Node, _module: &'n ModuleNode) {
        walk_node(self, node);
    }

    fn visit_procedure(&mut self, node: &'n Node, _procedure: &'n ProcedureNode) {
        walk_node(self, node);
    }

    fn visit_variable_declaration(&mut self, node: &'n Node, _decl: &'n VariableDeclarationNode) {
        walk_node(self, node);
    }

    fn visit_variable(&mut self, node: &'n Node, _variable: &'n VariableNode) {
        walk_node(self, node);
    }

    fn visit_constant_declaration(&mut self, node: &'n Node, _decl: &'n ConstantDeclarationNode) {
        walk_node(self, node);
    }

    fn visit_constant(&mut self, node: &'n Node, _constant: &'n ConstantNode) {
        walk_node(self, node);
    }
}

/// Visit each child of `node` in order.
pub fn walk_node<'n, V: Visitor<'n> + ?Sized>(visitor: &mut V, node: &'n Node) {
    for child in node.children() {
        visitor.visit_node(child);
    }
}
