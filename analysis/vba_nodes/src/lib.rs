//! VBA declaration model.
//!
//! Turns declaration-shaped syntax fragments into an immutable tree of typed
//! nodes: names, scopes, declared types and accessibility. The tree is what
//! inspections and refactorings read; it is rebuilt wholesale whenever a
//! module is reparsed.
//!
//! # Pipeline
//!
//! ```text
//! ModuleFragment ──build_module──▶ Node (Module)
//!                                   ├── VariableDeclaration ─▶ Variable, Variable, ...
//!                                   ├── ConstantDeclaration ─▶ Constant, ...
//!                                   └── Procedure ─▶ local declarations
//! ```
//!
//! Each declared symbol goes through two pure resolvers:
//! - `resolve_type`: `As` clause, then type-hint sigil, then `Variant`
//! - `resolve_accessibility`: locality first, then the visibility keyword,
//!   then the configured default
//!
//! `build_project` builds many modules (in parallel by default) and isolates
//! failures per module.

mod accessibility;
mod build;
mod config;
mod error;
mod node;
mod project;
mod type_resolution;
pub mod visitor;

pub use accessibility::{resolve_accessibility, Accessibility};
pub use build::{
    build_constant, build_constant_declaration, build_module, build_procedure, build_variable,
    build_variable_declaration,
};
pub use config::{
    BuildConfig, DEFAULT_CONSTANT_ACCESSIBILITY, DEFAULT_MODULE_ACCESSIBILITY,
    DEFAULT_PROCEDURE_ACCESSIBILITY,
};
pub use error::{BuildError, FragmentKind};
pub use node::{
    ConstantDeclarationNode, ConstantNode, Descendants, ModuleNode, Node, NodeBuilder, NodeKind,
    ProcedureNode, VariableDeclarationNode, VariableNode,
};
pub use project::{build_project, ModuleFailure, ProjectModel};
pub use type_resolution::{resolve_type, ResolvedType};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=vba_nodes=debug` or `RUST_LOG=vba_nodes=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
