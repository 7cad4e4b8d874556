//! Declaration builders.
//!
//! One builder per declaration construct. Each turns a single syntax
//! fragment plus its enclosing scope into typed nodes, calling the type and
//! accessibility resolvers once per declared symbol. Builders are pure: the
//! same fragment and scope always produce a value-equal node, or the same
//! error.
//!
//! # Locality
//!
//! A variable statement is local when it is introduced by `Dim` or `Static`,
//! or when it is built in a procedure scope even without an introducer.
//! Local declarations resolve to `Private` and their visibility text is never
//! inspected. Constants carry no introducer, so they are local exactly when
//! their scope is a procedure.
//!
//! # Module Structure
//!
//! - `variable`: variable statements and their entries
//! - `constant`: `Const` statements and their entries
//! - `procedure`: procedure members and their local declarations
//! - `module`: whole modules, the entry point used by the project pass

mod constant;
mod module;
mod procedure;
mod variable;

pub use constant::{build_constant, build_constant_declaration};
pub use module::build_module;
pub use procedure::build_procedure;
pub use variable::{build_variable, build_variable_declaration};

use vba_ir::{Identifier, Span};

use crate::{BuildError, FragmentKind};

/// The identifier text of a declaration, which must be present and non-empty.
fn required_name(identifier: Option<&Identifier>, span: Span) -> Result<&str, BuildError> {
    match identifier {
        Some(ident) if !ident.text.is_empty() => Ok(&ident.text),
        Some(ident) => Err(BuildError::missing(FragmentKind::Identifier, ident.span)),
        None => Err(BuildError::missing(FragmentKind::Identifier, span)),
    }
}
