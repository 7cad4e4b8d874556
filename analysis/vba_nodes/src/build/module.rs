use vba_ir::{ModuleFragment, ModuleItem, Scope};

use super::{build_constant_declaration, build_procedure, build_variable_declaration};
use crate::{BuildConfig, BuildError, ModuleNode, Node, NodeBuilder, NodeKind};

/// Build the declaration tree of one module.
///
/// Fails on the first fragment that breaks the parser contract; the caller
/// decides whether that excludes the module or aborts.
#[tracing::instrument(level = "debug", skip_all, fields(module = %module.name, items = module.items.len()))]
pub fn build_module(module: &ModuleFragment, config: &BuildConfig) -> Result<Node, BuildError> {
    let scope = Scope::module(&module.name);
    let kind = NodeKind::Module(ModuleNode {
        name: module.name.clone(),
    });
    let mut builder =
        NodeBuilder::new(module.span, scope.clone(), kind).with_capacity(module.items.len());

    for item in &module.items {
        let child = match item {
            ModuleItem::Variable(stmt) => build_variable_declaration(stmt, &scope, config)?,
            ModuleItem::Constant(stmt) => build_constant_declaration(stmt, &scope, config)?,
            ModuleItem::Procedure(stmt) => build_procedure(stmt, &scope, config)?,
        };
        tracing::trace!(kind = child.kind().label(), span = %child.source(), "item built");
        builder.add_child(child);
    }

    let node = builder.finish();
    tracing::debug!(nodes = node.descendants().count(), "module built");
    Ok(node)
}
