//! `storproc` - stored procedure attribute resolution.
//!
//! This crate decides, for a data-access method, which stored procedure to
//! call and which output parameters to read back. Inputs are the method's
//! [`ProcedureDescriptor`] and the [`NamedProcedureDeclaration`]s registered
//! on its owning entity. The output is an immutable [`ProcedureAttributes`].
//!
//! # Example
//!
//! ```
//! use storproc::{resolve, ParameterMode, ProcedureDescriptor, TypeTag};
//!
//! // No declarations: the method name is the procedure name and the
//! // unnamed output parameter gets a synthetic name.
//! let descriptor = ProcedureDescriptor::new(TypeTag::Float);
//! let attrs = resolve(Some(&descriptor), "Account", "findBalance", Some(&[][..]))?;
//!
//! assert_eq!(attrs.procedure_name(), "findBalance");
//! assert_eq!(attrs.output_parameters()[0].name(), Some("out"));
//! assert_eq!(attrs.output_parameters()[0].mode(), ParameterMode::Out);
//! assert!(attrs.has_return_value());
//! # Ok::<(), storproc::ResolveError>(())
//! ```
//!
//! # Modules
//!
//! - [`attributes`] - The resolved [`ProcedureAttributes`]
//! - [`resolver`] - [`AttributeSource`] and [`resolve`]
//! - [`catalog`] - [`DeclarationCatalog`] of per-entity declarations

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod attributes;
pub mod catalog;
pub mod resolver;


pub use attributes::{
    synthetic_parameter_name, ProcedureAttributes, SYNTHETIC_OUTPUT_PARAMETER_NAME,
};
pub use catalog::{DeclarationCatalog, EntityDeclarations};
pub use resolver::{lookup_key, resolve, AttributeSource, ResolverConfig};

// Re-export the core types so callers need a single dependency
pub use storproc_core::{
    has_text, NamedProcedureDeclaration, ParameterMode, ParameterSpec, ProcedureDescriptor,
    ResolveError, ResolveResult, TypeTag,
};
