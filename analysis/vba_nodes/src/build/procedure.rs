use vba_ir::{ProcedureItem, ProcedureStmt, Scope};

use super::{build_constant_declaration, build_variable_declaration, required_name};
use crate::{
    resolve_accessibility, resolve_type, BuildConfig, BuildError, Node, NodeBuilder, NodeKind,
    ProcedureNode,
};

/// Build the node for a procedure member and its local declarations.
///
/// `module_scope` is the scope of the module declaring the procedure. The
/// local declarations are built in the `Module.Procedure` scope.
#[tracing::instrument(level = "trace", skip_all, fields(scope = %module_scope))]
pub fn build_procedure(
    stmt: &ProcedureStmt,
    module_scope: &Scope,
    config: &BuildConfig,
) -> Result<Node, BuildError> {
    let name = required_name(stmt.identifier.as_ref(), stmt.span)?;
    let accessibility = resolve_accessibility(
        false,
        stmt.visibility.as_ref(),
        config.procedure_default_accessibility,
    )?;
    let return_type = if stmt.kind.returns_value() {
        Some(resolve_type(stmt.as_type.as_ref(), stmt.type_hint.as_ref())?)
    } else {
        None
    };

    let kind = NodeKind::Procedure(ProcedureNode {
        name: name.to_string(),
        kind: stmt.kind,
        is_static: stmt.is_static,
        accessibility,
        return_type,
    });
    let mut builder =
        NodeBuilder::new(stmt.span, module_scope.clone(), kind).with_capacity(stmt.body.len());

    let local_scope = Scope::procedure(module_scope.module_name(), name);
    for item in &stmt.body {
        let child = match item {
            ProcedureItem::Variable(var) => build_variable_declaration(var, &local_scope, config)?,
            ProcedureItem::Constant(cst) => build_constant_declaration(cst, &local_scope, config)?,
        };
        builder.add_child(child);
    }

    Ok(builder.finish())
}
