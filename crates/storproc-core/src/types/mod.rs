//! Value types for stored procedure resolution.
//!
//! These are plain data carriers handed between the resolver and the
//! collaborators that extract method directives and entity declarations.

mod declaration;
mod descriptor;
mod mode;
mod parameter;
mod type_tag;

pub use declaration::NamedProcedureDeclaration;
pub use descriptor::ProcedureDescriptor;
pub use mode::ParameterMode;
pub use parameter::ParameterSpec;
pub use type_tag::TypeTag;

/// Returns true if the string is present and contains a non-whitespace character.
#[must_use]
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| s.chars().any(|c| !c.is_whitespace()))
}
