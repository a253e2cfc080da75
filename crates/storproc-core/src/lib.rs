//! `storproc` core types
//!
//! This crate provides the value types shared by the stored procedure
//! attribute resolver and its collaborators.
//!
//! # Overview
//!
//! - **Modes**: [`ParameterMode`] describes how a parameter is transferred
//! - **Types**: [`TypeTag`] names the SQL-facing type of a parameter or result
//! - **Parameters**: [`ParameterSpec`] describes one procedure parameter
//! - **Declarations**: [`NamedProcedureDeclaration`] is an entity-level,
//!   pre-registered procedure with its parameter list
//! - **Descriptors**: [`ProcedureDescriptor`] is the per-method directive
//!
//! # Example
//!
//! ```
//! use storproc_core::{NamedProcedureDeclaration, ParameterMode, ParameterSpec, TypeTag};
//!
//! let decl = NamedProcedureDeclaration::new("Account.transfer")
//!     .with_parameter(ParameterSpec::new("amt", ParameterMode::In, TypeTag::Float))
//!     .with_parameter(ParameterSpec::new("code", ParameterMode::Out, TypeTag::Integer));
//!
//! let outputs: Vec<_> = decl.output_parameters().collect();
//! assert_eq!(outputs.len(), 1);
//! assert_eq!(outputs[0].name(), Some("code"));
//! ```
//!
//! # Modules
//!
//! - [`types`] - Value types
//! - [`error`] - Error types ([`ResolveError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::{ResolveError, ResolveResult};
pub use types::{
    has_text, NamedProcedureDeclaration, ParameterMode, ParameterSpec, ProcedureDescriptor,
    TypeTag,
};
