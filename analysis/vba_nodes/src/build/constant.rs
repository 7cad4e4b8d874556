use vba_ir::{ConstStmt, ConstSubStmt, Scope, VisibilityClause};

use super::required_name;
use crate::{
    resolve_accessibility, resolve_type, Accessibility, BuildConfig, BuildError,
    ConstantDeclarationNode, ConstantNode, FragmentKind, Node, NodeBuilder, NodeKind,
};

/// Build the node for one `Const` statement.
///
/// Constants have no `Dim`/`Static` introducer; they are local exactly when
/// declared in a procedure scope. A module-level constant with no keyword
/// takes `config.constant_default_accessibility` (private by default), not
/// the variable default.
#[tracing::instrument(level = "trace", skip_all, fields(scope = %scope, count = stmt.subs.len()))]
pub fn build_constant_declaration(
    stmt: &ConstStmt,
    scope: &Scope,
    config: &BuildConfig,
) -> Result<Node, BuildError> {
    let is_local = scope.is_procedure();
    let visibility = stmt.visibility.as_ref();

    let kind = NodeKind::ConstantDeclaration(ConstantDeclarationNode {
        is_local,
        raw_visibility: visibility.map(|v| v.text.clone()),
    });
    let mut builder =
        NodeBuilder::new(stmt.span, scope.clone(), kind).with_capacity(stmt.subs.len());

    for sub in &stmt.subs {
        builder.add_child(build_constant(
            sub,
            scope,
            visibility,
            is_local,
            config.constant_default_accessibility,
        )?);
    }

    Ok(builder.finish())
}

/// Build the node for one entry of a `Const` statement.
pub fn build_constant(
    sub: &ConstSubStmt,
    scope: &Scope,
    visibility: Option<&VisibilityClause>,
    is_local: bool,
    default_accessibility: Accessibility,
) -> Result<Node, BuildError> {
    let name = required_name(sub.identifier.as_ref(), sub.span)?;
    let value = sub
        .value
        .as_ref()
        .ok_or_else(|| BuildError::missing(FragmentKind::ConstantValue, sub.span))?;
    let resolved = resolve_type(sub.as_type.as_ref(), sub.type_hint.as_ref())?;
    let accessibility = resolve_accessibility(is_local, visibility, default_accessibility)?;

    tracing::trace!(name, type_name = %resolved.name, %accessibility, "constant");

    Ok(Node::leaf(
        sub.span,
        scope.clone(),
        NodeKind::Constant(ConstantNode {
            name: name.to_string(),
            type_name: resolved.name,
            is_implicitly_typed: resolved.is_implicitly_typed,
            is_using_type_hint: resolved.is_using_type_hint,
            accessibility,
            value: value.text.clone(),
        }),
    ))
}
