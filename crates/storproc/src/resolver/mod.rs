//! Stored procedure attribute resolution.
//!
//! Turns a method's [`ProcedureDescriptor`] and the named declarations visible
//! to its owning entity into [`ProcedureAttributes`].
//!
//! # Resolution
//!
//! 1. The lookup key is the descriptor's named query reference if it has
//!    text, otherwise `"{entity}.{method}"`.
//! 2. The first declaration whose name equals the key is used.
//! 3. With a match, the procedure is named. An explicit output parameter
//!    name on the descriptor replaces all declared outputs; otherwise the
//!    declaration's OUT, INOUT and REF_CURSOR parameters are kept in order.
//! 4. Without a match, the procedure name is taken from the descriptor's
//!    primary name, its secondary name, or the method name, and the single
//!    output parameter is built from the descriptor.
//!
//! # Example
//!
//! ```
//! use storproc::{resolve, NamedProcedureDeclaration, ParameterMode, ParameterSpec};
//! use storproc::{ProcedureDescriptor, TypeTag};
//!
//! let declarations = vec![NamedProcedureDeclaration::new("Account.transfer")
//!     .with_parameter(ParameterSpec::new("amt", ParameterMode::In, TypeTag::Float))
//!     .with_parameter(ParameterSpec::new("code", ParameterMode::Out, TypeTag::Integer))];
//! let descriptor = ProcedureDescriptor::new(TypeTag::Integer);
//!
//! let attrs = resolve(Some(&descriptor), "Account", "transfer", Some(declarations.as_slice()))?;
//! assert_eq!(attrs.procedure_name(), "Account.transfer");
//! assert!(attrs.is_named_stored_procedure());
//! # Ok::<(), storproc::ResolveError>(())
//! ```

mod config;

use std::borrow::Cow;

use storproc_core::{
    NamedProcedureDeclaration, ParameterSpec, ProcedureDescriptor, ResolveError, ResolveResult,
};
use tracing::{debug, warn};

use crate::attributes::ProcedureAttributes;
use crate::catalog::DeclarationCatalog;

pub use config::ResolverConfig;

/// Resolves procedure attributes for data-access methods.
///
/// The source holds only its configuration, so one instance can be shared
/// freely across threads. Resolution is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct AttributeSource {
    config: ResolverConfig,
}

impl AttributeSource {
    /// Creates a source with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with the given configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves the attributes of the procedure backing `entity.method`.
    ///
    /// `descriptor` and `declarations` are required. Passing `None` for
    /// either is a programming error in the calling layer and fails with
    /// [`ResolveError::InvalidInput`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Configuration`] if no declaration matches and
    /// no procedure name can be derived from the descriptor or the method.
    pub fn resolve(
        &self,
        descriptor: Option<&ProcedureDescriptor>,
        entity: &str,
        method: &str,
        declarations: Option<&[NamedProcedureDeclaration]>,
    ) -> ResolveResult<ProcedureAttributes> {
        let descriptor = descriptor.ok_or_else(|| {
            ResolveError::invalid_input(format!(
                "procedure descriptor must not be absent for method '{entity}.{method}'"
            ))
        })?;
        let declarations = declarations.ok_or_else(|| {
            ResolveError::invalid_input(format!(
                "named procedure declarations must not be absent for entity '{entity}'"
            ))
        })?;

        match self.find_declaration(descriptor, entity, method, declarations) {
            Some(declaration) => named_attributes(descriptor, declaration),
            None => ad_hoc_attributes(descriptor, entity, method),
        }
    }

    /// Resolves using the declarations registered for `entity` in `catalog`.
    ///
    /// An entity without registered declarations resolves against an empty list.
    pub fn resolve_in_catalog(
        &self,
        descriptor: Option<&ProcedureDescriptor>,
        entity: &str,
        method: &str,
        catalog: &DeclarationCatalog,
    ) -> ResolveResult<ProcedureAttributes> {
        self.resolve(descriptor, entity, method, Some(catalog.declarations_for(entity)))
    }

    fn find_declaration<'a>(
        &self,
        descriptor: &ProcedureDescriptor,
        entity: &str,
        method: &str,
        declarations: &'a [NamedProcedureDeclaration],
    ) -> Option<&'a NamedProcedureDeclaration> {
        if declarations.is_empty() {
            return None;
        }

        let key = lookup_key(descriptor, entity, method);
        let mut matches = declarations.iter().filter(|d| d.name == key);
        let found = matches.next()?;

        if self.config.warn_on_duplicate_declarations {
            let duplicates = matches.count();
            if duplicates > 0 {
                warn!(
                    key = %key,
                    entity,
                    duplicates,
                    "multiple named procedure declarations share a name, using the first"
                );
            }
        }

        Some(found)
    }
}

/// Resolves procedure attributes with the default configuration.
///
/// See [`AttributeSource::resolve`].
pub fn resolve(
    descriptor: Option<&ProcedureDescriptor>,
    entity: &str,
    method: &str,
    declarations: Option<&[NamedProcedureDeclaration]>,
) -> ResolveResult<ProcedureAttributes> {
    AttributeSource::new().resolve(descriptor, entity, method, declarations)
}

/// The declaration name a method refers to.
#[must_use]
pub fn lookup_key<'a>(
    descriptor: &'a ProcedureDescriptor,
    entity: &str,
    method: &str,
) -> Cow<'a, str> {
    match descriptor.named_query_ref() {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("{entity}.{method}")),
    }
}

fn named_attributes(
    descriptor: &ProcedureDescriptor,
    declaration: &NamedProcedureDeclaration,
) -> ResolveResult<ProcedureAttributes> {
    let output_parameters: Vec<ParameterSpec> = if descriptor.output_parameter_name().is_some() {
        // The directive's output parameter takes precedence over the declaration.
        vec![descriptor.output_parameter()]
    } else {
        declaration.output_parameters().cloned().collect()
    };

    debug!(
        procedure = %declaration.name,
        outputs = output_parameters.len(),
        "resolved named stored procedure"
    );

    ProcedureAttributes::new(declaration.name.clone(), output_parameters, true)
}

fn ad_hoc_attributes(
    descriptor: &ProcedureDescriptor,
    entity: &str,
    method: &str,
) -> ResolveResult<ProcedureAttributes> {
    let procedure_name = descriptor.explicit_name().unwrap_or(method);
    if procedure_name.trim().is_empty() {
        return Err(ResolveError::configuration(entity, method));
    }

    debug!(procedure = procedure_name, entity, method, "resolved ad-hoc stored procedure");

    ProcedureAttributes::ad_hoc(procedure_name, descriptor.output_parameter())
}

#[cfg(test)]
mod tests {
    use storproc_core::{ParameterMode, TypeTag};

    use super::*;

    fn transfer_declaration() -> NamedProcedureDeclaration {
        NamedProcedureDeclaration::new("Account.transfer").with_parameters([
            ParameterSpec::new("amt", ParameterMode::In, TypeTag::Float),
            ParameterSpec::new("code", ParameterMode::Out, TypeTag::Integer),
            ParameterSpec::new("cursor", ParameterMode::RefCursor, TypeTag::Cursor),
        ])
    }

    #[test]
    fn lookup_key_prefers_reference() {
        let desc = ProcedureDescriptor::new(TypeTag::Void).with_named_query_ref("Shared.audit");
        assert_eq!(lookup_key(&desc, "Account", "transfer"), "Shared.audit");

        let desc = ProcedureDescriptor::new(TypeTag::Void).with_named_query_ref("");
        assert_eq!(lookup_key(&desc, "Account", "transfer"), "Account.transfer");
    }

    #[test]
    fn missing_descriptor_is_invalid_input() {
        let err = resolve(None, "Account", "transfer", Some(&[][..])).expect_err("should fail");
        assert!(
            matches!(err, ResolveError::InvalidInput(ref msg) if msg.contains("Account.transfer"))
        );
    }

    #[test]
    fn missing_declarations_is_invalid_input() {
        let desc = ProcedureDescriptor::new(TypeTag::Integer);
        let err = resolve(Some(&desc), "Account", "transfer", None).expect_err("should fail");
        assert!(matches!(err, ResolveError::InvalidInput(_)));
    }

    #[test]
    fn match_is_case_sensitive() {
        let declarations = vec![transfer_declaration()];
        let desc = ProcedureDescriptor::new(TypeTag::Integer);
        let attrs = resolve(Some(&desc), "account", "transfer", Some(declarations.as_slice()))
            .expect("resolves ad-hoc");
        assert!(!attrs.is_named_stored_procedure());
        assert_eq!(attrs.procedure_name(), "transfer");
    }

    #[test]
    fn explicit_name_ignored_on_named_path() {
        let declarations = vec![transfer_declaration()];
        let desc = ProcedureDescriptor::new(TypeTag::Integer).with_primary_name("p_transfer");
        let attrs = resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
            .expect("resolves");
        assert_eq!(attrs.procedure_name(), "Account.transfer");
    }

    #[test]
    fn reference_selects_other_declaration() {
        let declarations = vec![
            transfer_declaration(),
            NamedProcedureDeclaration::new("Shared.audit").with_parameter(ParameterSpec::new(
                "status",
                ParameterMode::InOut,
                TypeTag::Text,
            )),
        ];
        let desc = ProcedureDescriptor::new(TypeTag::Text).with_named_query_ref("Shared.audit");
        let attrs = resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
            .expect("resolves");

        assert_eq!(attrs.procedure_name(), "Shared.audit");
        assert_eq!(attrs.output_parameter_names(), vec![Some("status")]);
    }

    #[test]
    fn dangling_reference_falls_back_to_ad_hoc() {
        let declarations = vec![transfer_declaration()];
        let desc = ProcedureDescriptor::new(TypeTag::Integer).with_named_query_ref("Missing.proc");
        let attrs = resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
            .expect("resolves");
        assert!(!attrs.is_named_stored_procedure());
        assert_eq!(attrs.procedure_name(), "transfer");
    }

    #[test]
    fn whitespace_output_name_overrides_declaration() {
        let declarations = vec![transfer_declaration()];
        let desc = ProcedureDescriptor::new(TypeTag::Integer).with_output_parameter_name(" ");
        let attrs = resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
            .expect("resolves");

        assert!(attrs.is_named_stored_procedure());
        assert_eq!(attrs.output_parameter_names(), vec![Some(" ")]);
        assert_eq!(attrs.output_parameters()[0].mode(), ParameterMode::Out);
    }

    #[test]
    fn empty_output_name_keeps_declared_outputs() {
        let declarations = vec![transfer_declaration()];
        let desc = ProcedureDescriptor::new(TypeTag::Integer).with_output_parameter_name("");
        let attrs = resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
            .expect("resolves");

        assert_eq!(attrs.output_parameter_names(), vec![Some("code"), Some("cursor")]);
    }

    #[test]
    fn first_duplicate_wins() {
        let declarations = vec![
            transfer_declaration(),
            NamedProcedureDeclaration::new("Account.transfer").with_parameter(
                ParameterSpec::new("other", ParameterMode::Out, TypeTag::Text),
            ),
        ];
        let desc = ProcedureDescriptor::new(TypeTag::Integer);

        for source in [
            AttributeSource::new(),
            AttributeSource::with_config(
                ResolverConfig::new().with_warn_on_duplicate_declarations(false),
            ),
        ] {
            let attrs = source
                .resolve(Some(&desc), "Account", "transfer", Some(declarations.as_slice()))
                .expect("resolves");
            assert_eq!(attrs.output_parameter_names(), vec![Some("code"), Some("cursor")]);
        }
    }

    #[test]
    fn declaration_without_outputs_has_no_return_value() {
        let declarations = vec![NamedProcedureDeclaration::new("Account.close")
            .with_parameter(ParameterSpec::new("id", ParameterMode::In, TypeTag::Integer))];
        let desc = ProcedureDescriptor::new(TypeTag::Void);
        let attrs = resolve(Some(&desc), "Account", "close", Some(declarations.as_slice()))
            .expect("resolves");

        assert!(attrs.is_named_stored_procedure());
        assert!(attrs.output_parameters().is_empty());
        assert!(!attrs.has_return_value());
    }

    #[test]
    fn blank_method_name_is_configuration_error() {
        let desc = ProcedureDescriptor::new(TypeTag::Integer).with_primary_name(" ");
        let err = resolve(Some(&desc), "Account", "", Some(&[][..])).expect_err("should fail");
        assert_eq!(err, ResolveError::configuration("Account", ""));
    }
}
