//! Whole-project build pass.
//!
//! Modules are independent: each build reads only its own fragment and the
//! constant sigil table, so modules can be built on a thread pool without
//! shared mutable state. A module that fails to build is excluded from the
//! model and reported; every other module is still built.

use rayon::prelude::*;
use vba_diagnostic::Diagnostic;
use vba_ir::ModuleFragment;

use crate::{build_module, BuildConfig, BuildError, Node};

/// A module excluded from the model because its build failed.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModuleFailure {
    /// Name of the excluded module.
    pub module: String,
    pub error: BuildError,
}

impl ModuleFailure {
    /// Diagnostic naming the excluded module.
    pub fn diagnostic(&self) -> Diagnostic {
        self.error.to_diagnostic().with_note(format!(
            "declarations of module `{}` were excluded from the analysis",
            self.module
        ))
    }
}

/// Declaration model of a whole project.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ProjectModel {
    /// Module trees of every module that built, in input order.
    pub modules: Vec<Node>,
    /// Modules that failed, in input order.
    pub failures: Vec<ModuleFailure>,
}

impl ProjectModel {
    /// Find a module tree by name, ignoring case.
    pub fn module(&self, name: &str) -> Option<&Node> {
        self.modules.iter().find(|node| {
            node.as_module()
                .is_some_and(|m| m.name.eq_ignore_ascii_case(name))
        })
    }

    /// Whether every module built.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the declaration model of every module.
///
/// Output order follows input order regardless of `config.parallel`.
#[tracing::instrument(level = "debug", skip_all, fields(count = modules.len(), parallel = config.parallel))]
pub fn build_project(modules: &[ModuleFragment], config: &BuildConfig) -> ProjectModel {
    let results: Vec<_> = if config.parallel {
        modules
            .par_iter()
            .map(|module| build_module(module, config))
            .collect()
    } else {
        modules
            .iter()
            .map(|module| build_module(module, config))
            .collect()
    };

    let mut model = ProjectModel::default();
    for (module, result) in modules.iter().zip(results) {
        match result {
            Ok(node) => model.modules.push(node),
            Err(error) => {
                tracing::warn!(module = %module.name, %error, "module excluded from declaration model");
                model.failures.push(ModuleFailure {
                    module: module.name.clone(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        built = model.modules.len(),
        failed = model.failures.len(),
        "project build complete"
    );
    model
}
