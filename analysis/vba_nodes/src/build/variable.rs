use vba_ir::{Scope, VariableStmt, VariableSubStmt, VisibilityClause};

use super::required_name;
use crate::{
    resolve_accessibility, resolve_type, Accessibility, BuildConfig, BuildError, Node,
    NodeBuilder, NodeKind, VariableDeclarationNode, VariableNode,
};

/// Build the node for one variable statement.
///
/// The statement is local when introduced by `Dim`/`Static` or when it sits
/// in a procedure scope. Every entry shares the statement's visibility
/// keyword and locality. Entries are neither reordered nor deduplicated.
#[tracing::instrument(level = "trace", skip_all, fields(scope = %scope, count = stmt.subs.len()))]
pub fn build_variable_declaration(
    stmt: &VariableStmt,
    scope: &Scope,
    config: &BuildConfig,
) -> Result<Node, BuildError> {
    let is_local = stmt.is_local() || scope.is_procedure();
    let visibility = stmt.visibility.as_ref();

    let kind = NodeKind::VariableDeclaration(VariableDeclarationNode {
        is_local,
        raw_visibility: visibility.map(|v| v.text.clone()),
        with_events: stmt.with_events,
    });
    let mut builder =
        NodeBuilder::new(stmt.span, scope.clone(), kind).with_capacity(stmt.subs.len());

    for sub in &stmt.subs {
        builder.add_child(build_variable(
            sub,
            scope,
            visibility,
            is_local,
            config.module_default_accessibility,
        )?);
    }

    Ok(builder.finish())
}

/// Build the node for one comma-separated entry of a variable statement.
pub fn build_variable(
    sub: &VariableSubStmt,
    scope: &Scope,
    visibility: Option<&VisibilityClause>,
    is_local: bool,
    default_accessibility: Accessibility,
) -> Result<Node, BuildError> {
    let name = required_name(sub.identifier.as_ref(), sub.span)?;
    let resolved = resolve_type(sub.as_type.as_ref(), sub.type_hint.as_ref())?;
    let accessibility = resolve_accessibility(is_local, visibility, default_accessibility)?;

    tracing::trace!(name, type_name = %resolved.name, %accessibility, "variable");

    Ok(Node::leaf(
        sub.span,
        scope.clone(),
        NodeKind::Variable(VariableNode {
            name: name.to_string(),
            type_name: resolved.name,
            is_implicitly_typed: resolved.is_implicitly_typed,
            is_using_type_hint: resolved.is_using_type_hint,
            accessibility,
            is_array: sub.subscripts.is_some(),
            is_new: sub.as_type.as_ref().is_some_and(|clause| clause.is_new),
        }),
    ))
}
