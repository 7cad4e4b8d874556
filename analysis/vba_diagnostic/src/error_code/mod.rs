//! Error codes for declaration-model diagnostics.
//!
//! Format: E#### where the first digit indicates the category:
//! - E0xxx: Node-building errors (upstream parser contract violations)

use std::fmt;

/// Error codes for all declaration-model diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Node-building Errors (E0xxx)
    /// Required sub-fragment missing from a declaration fragment
    E0001,
    /// Type-hint sigil outside the known set
    E0002,
    /// Visibility keyword outside the known set
    E0003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
