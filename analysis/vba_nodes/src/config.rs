//! Build configuration.

use crate::Accessibility;

/// Accessibility of a module-level variable written without a visibility
/// keyword and without `Dim`/`Static`.
pub const DEFAULT_MODULE_ACCESSIBILITY: Accessibility = Accessibility::Public;

/// Accessibility of a module-level `Const` written without a visibility
/// keyword. Constants are private unless declared `Public`.
pub const DEFAULT_CONSTANT_ACCESSIBILITY: Accessibility = Accessibility::Private;

/// Accessibility of a procedure written without a visibility keyword.
pub const DEFAULT_PROCEDURE_ACCESSIBILITY: Accessibility = Accessibility::Public;

/// Configuration for building declaration models.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Accessibility applied to module-level variables with no keyword.
    pub module_default_accessibility: Accessibility,
    /// Accessibility applied to module-level constants with no keyword.
    pub constant_default_accessibility: Accessibility,
    /// Accessibility applied to procedures with no keyword.
    pub procedure_default_accessibility: Accessibility,
    /// Build modules on a thread pool.
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            module_default_accessibility: DEFAULT_MODULE_ACCESSIBILITY,
            constant_default_accessibility: DEFAULT_CONSTANT_ACCESSIBILITY,
            procedure_default_accessibility: DEFAULT_PROCEDURE_ACCESSIBILITY,
            parallel: true,
        }
    }
}

impl BuildConfig {
    #[must_use]
    pub fn with_module_default(mut self, accessibility: Accessibility) -> Self {
        self.module_default_accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_constant_default(mut self, accessibility: Accessibility) -> Self {
        self.constant_default_accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_procedure_default(mut self, accessibility: Accessibility) -> Self {
        self.procedure_default_accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
