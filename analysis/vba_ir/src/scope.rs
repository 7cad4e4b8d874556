//! Enclosing-scope identifiers.
//!
//! A scope names the code unit a declaration belongs to: either a module
//! (`"Module1"`) or a procedure inside a module (`"Module1.DoWork"`).

use std::fmt;
use std::sync::Arc;

/// Identifier of the code unit enclosing a declaration.
///
/// The canonical text is stored once and shared, so every node built for a
/// module can carry its scope without copying strings.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Scope {
    text: Arc<str>,
    /// Byte index of the `.` separating module and procedure, if any.
    separator: Option<usize>,
}

impl Scope {
    /// Module-level scope.
    pub fn module(module: &str) -> Self {
        Scope {
            text: Arc::from(module),
            separator: None,
        }
    }

    /// Procedure-level scope inside `module`.
    pub fn procedure(module: &str, procedure: &str) -> Self {
        Scope {
            text: Arc::from(format!("{module}.{procedure}")),
            separator: Some(module.len()),
        }
    }

    /// Parse a scope from its canonical text, splitting at the first `.`.
    ///
    /// Returns `None` when the text or any of its components is empty.
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once('.') {
            None if !text.is_empty() => Some(Scope::module(text)),
            Some((module, procedure)) if !module.is_empty() && !procedure.is_empty() => {
                Some(Scope::procedure(module, procedure))
            }
            _ => None,
        }
    }

    /// Name of the module, for both module and procedure scopes.
    pub fn module_name(&self) -> &str {
        match self.separator {
            Some(idx) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Name of the procedure, if this is a procedure scope.
    pub fn procedure_name(&self) -> Option<&str> {
        self.separator.map(|idx| &self.text[idx + 1..])
    }

    /// Whether this scope is a procedure body rather than a module.
    pub fn is_procedure(&self) -> bool {
        self.separator.is_some()
    }

    /// The canonical `Module` / `Module.Procedure` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope({})", self.text)
    }
}
