//! Diagnostic system for declaration-model failures.
//!
//! A diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A labeled span (where it went wrong)
//! - Notes (which module was excluded, and why)

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
