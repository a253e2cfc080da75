//! Per-method procedure directives.

use serde::{Deserialize, Serialize};

use super::type_tag::TypeTag;
use super::{has_text, ParameterMode, ParameterSpec};

/// The procedure directive declared on a data-access method.
///
/// `primary_name` and `secondary_name` are two spellings of an explicit
/// procedure name; the primary one wins when both have text.
/// `named_query_ref` points at a [`NamedProcedureDeclaration`] by name.
///
/// [`NamedProcedureDeclaration`]: super::NamedProcedureDeclaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcedureDescriptor {
    /// Explicit procedure name.
    pub primary_name: Option<String>,
    /// Alternative spelling of the explicit procedure name.
    pub secondary_name: Option<String>,
    /// Name of the named declaration to use.
    pub named_query_ref: Option<String>,
    /// Name of the output parameter.
    pub output_parameter_name: Option<String>,
    /// Whether the result is returned through a cursor.
    pub ref_cursor: bool,
    /// The method's result type.
    pub return_type: TypeTag,
}

impl ProcedureDescriptor {
    /// Creates an empty descriptor returning `return_type`.
    #[must_use]
    pub fn new(return_type: TypeTag) -> Self {
        Self { return_type, ..Self::default() }
    }

    /// Sets the explicit procedure name.
    #[must_use]
    pub fn with_primary_name(mut self, name: impl Into<String>) -> Self {
        self.primary_name = Some(name.into());
        self
    }

    /// Sets the alternative procedure name.
    #[must_use]
    pub fn with_secondary_name(mut self, name: impl Into<String>) -> Self {
        self.secondary_name = Some(name.into());
        self
    }

    /// Sets the named declaration reference.
    #[must_use]
    pub fn with_named_query_ref(mut self, name: impl Into<String>) -> Self {
        self.named_query_ref = Some(name.into());
        self
    }

    /// Sets the output parameter name.
    #[must_use]
    pub fn with_output_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.output_parameter_name = Some(name.into());
        self
    }

    /// Sets whether the result is a cursor.
    #[must_use]
    pub fn with_ref_cursor(mut self, ref_cursor: bool) -> Self {
        self.ref_cursor = ref_cursor;
        self
    }

    /// Returns the explicit procedure name, preferring the primary spelling.
    #[must_use]
    pub fn explicit_name(&self) -> Option<&str> {
        [self.primary_name.as_deref(), self.secondary_name.as_deref()]
            .into_iter()
            .find(|name| has_text(*name))
            .flatten()
    }

    /// Returns the named declaration reference if it has text.
    #[must_use]
    pub fn named_query_ref(&self) -> Option<&str> {
        self.named_query_ref.as_deref().filter(|name| has_text(Some(*name)))
    }

    /// Returns the output parameter name if it is non-empty.
    ///
    /// Unlike the other names this is not a "has text" test: a
    /// whitespace-only name still counts as given.
    #[must_use]
    pub fn output_parameter_name(&self) -> Option<&str> {
        self.output_parameter_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Builds the single output parameter this directive describes.
    ///
    /// The name is copied as given and may be blank.
    #[must_use]
    pub fn output_parameter(&self) -> ParameterSpec {
        ParameterSpec {
            name: self.output_parameter_name.clone(),
            mode: ParameterMode::for_result(self.ref_cursor),
            ty: self.return_type.clone(),
        }
    }
}
