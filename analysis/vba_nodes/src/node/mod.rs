//! Declaration-model nodes.
//!
//! A `Node` carries the fields every element shares (its source span, its
//! enclosing scope, and the children it owns) plus a `NodeKind` payload.
//! The set of kinds is closed; consumers match on it exhaustively, so a new
//! declaration kind is a compile-time-checked change.
//!
//! Nodes are immutable once built. Children can only be appended through a
//! `NodeBuilder`, which is consumed by `finish()`. A reparsed module gets a
//! freshly built tree; existing trees are never patched.

mod kinds;

pub use kinds::{
    ConstantDeclarationNode, ConstantNode, ModuleNode, ProcedureNode, VariableDeclarationNode,
    VariableNode,
};

use vba_ir::{Scope, Span};

/// Per-kind payload of a node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Module(ModuleNode),
    Procedure(ProcedureNode),
    VariableDeclaration(VariableDeclarationNode),
    Variable(VariableNode),
    ConstantDeclaration(ConstantDeclarationNode),
    Constant(ConstantNode),
}

impl NodeKind {
    /// Short label for logging and debugging.
    pub const fn label(&self) -> &'static str {
        match self {
            NodeKind::Module(_) => "module",
            NodeKind::Procedure(_) => "procedure",
            NodeKind::VariableDeclaration(_) => "variable declaration",
            NodeKind::Variable(_) => "variable",
            NodeKind::ConstantDeclaration(_) => "constant declaration",
            NodeKind::Constant(_) => "constant",
        }
    }
}

/// An element of the declaration model.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    source: Span,
    scope: Scope,
    children: Vec<Node>,
    kind: NodeKind,
}

impl Node {
    /// A node without children.
    pub fn leaf(source: Span, scope: Scope, kind: NodeKind) -> Self {
        Node {
            source,
            scope,
            children: Vec::new(),
            kind,
        }
    }

    /// Span of the syntax fragment this node was built from.
    pub fn source(&self) -> Span {
        self.source
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Owned children, in source order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Declared name, for kinds that declare one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Module(m) => Some(&m.name),
            NodeKind::Procedure(p) => Some(&p.name),
            NodeKind::Variable(v) => Some(&v.name),
            NodeKind::Constant(c) => Some(&c.name),
            NodeKind::VariableDeclaration(_) | NodeKind::ConstantDeclaration(_) => None,
        }
    }

    /// All nodes below this one, depth-first, in source order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    pub fn as_module(&self) -> Option<&ModuleNode> {
        match &self.kind {
            NodeKind::Module(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&ProcedureNode> {
        match &self.kind {
            NodeKind::Procedure(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_variable_declaration(&self) -> Option<&VariableDeclarationNode> {
        match &self.kind {
            NodeKind::VariableDeclaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableNode> {
        match &self.kind {
            NodeKind::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_constant_declaration(&self) -> Option<&ConstantDeclarationNode> {
        match &self.kind {
            NodeKind::ConstantDeclaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&ConstantNode> {
        match &self.kind {
            NodeKind::Constant(c) => Some(c),
            _ => None,
        }
    }
}

/// Pre-order iterator over a node's descendants.
pub struct Descendants<'n> {
    stack: Vec<&'n Node>,
}

impl<'n> Iterator for Descendants<'n> {
    type Item = &'n Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Assembles a node and its children.
///
/// The only place children can be appended; `finish()` freezes the node.
#[derive(Debug)]
pub struct NodeBuilder {
    source: Span,
    scope: Scope,
    kind: NodeKind,
    children: Vec<Node>,
}

impl NodeBuilder {
    pub fn new(source: Span, scope: Scope, kind: NodeKind) -> Self {
        NodeBuilder {
            source,
            scope,
            kind,
            children: Vec::new(),
        }
    }

    /// Pre-size the child list.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.children.reserve_exact(capacity);
        self
    }

    /// Append a child after all previously added ones.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn finish(self) -> Node {
        Node {
            source: self.source,
            scope: self.scope,
            children: self.children,
            kind: self.kind,
        }
    }
}
