//! Procedure parameter definitions.

use serde::{Deserialize, Serialize};

use super::mode::ParameterMode;
use super::type_tag::TypeTag;

/// A parameter definition for a stored procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// The parameter name, if one was given.
    #[serde(default)]
    pub name: Option<String>,
    /// How the parameter is transferred.
    pub mode: ParameterMode,
    /// The parameter type.
    #[serde(rename = "type", default)]
    pub ty: TypeTag,
}

impl ParameterSpec {
    /// Creates a named parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, mode: ParameterMode, ty: TypeTag) -> Self {
        Self { name: Some(name.into()), mode, ty }
    }

    /// Creates a parameter without a name.
    #[must_use]
    pub fn unnamed(mode: ParameterMode, ty: TypeTag) -> Self {
        Self { name: None, mode, ty }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the transfer mode.
    #[must_use]
    pub fn mode(&self) -> ParameterMode {
        self.mode
    }

    /// Returns the parameter type.
    #[must_use]
    pub fn ty(&self) -> &TypeTag {
        &self.ty
    }

    /// Returns a copy of this parameter with a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
