//! Entity-level named procedure declarations.

use serde::{Deserialize, Serialize};

use super::parameter::ParameterSpec;

/// A pre-registered stored procedure, resolvable by its name.
///
/// Names are expected to be unique within one entity's declarations, but
/// this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedProcedureDeclaration {
    /// The lookup name (e.g., "Account.transfer").
    pub name: String,
    /// The declared parameters, in call order.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl NamedProcedureDeclaration {
    /// Creates a declaration without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parameters: vec![] }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        self.parameters.push(param);
        self
    }

    /// Adds multiple parameters.
    #[must_use]
    pub fn with_parameters(mut self, params: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(params);
        self
    }

    /// Returns the declaration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the parameters the procedure produces, in declared order.
    pub fn output_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.mode.is_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParameterMode, TypeTag};

    #[test]
    fn output_parameters_keep_order() {
        let decl = NamedProcedureDeclaration::new("Account.transfer").with_parameters([
            ParameterSpec::new("amt", ParameterMode::In, TypeTag::Float),
            ParameterSpec::new("code", ParameterMode::Out, TypeTag::Integer),
            ParameterSpec::new("acct", ParameterMode::InOut, TypeTag::Text),
            ParameterSpec::new("cursor", ParameterMode::RefCursor, TypeTag::Cursor),
        ]);

        let names: Vec<_> = decl.output_parameters().map(|p| p.name()).collect();
        assert_eq!(names, vec![Some("code"), Some("acct"), Some("cursor")]);
        assert_eq!(decl.parameters().len(), 4);
    }

    #[test]
    fn deserialize_without_parameters() {
        let decl: NamedProcedureDeclaration =
            serde_json::from_str(r#"{"name":"Account.close"}"#).expect("deserialize");
        assert_eq!(decl, NamedProcedureDeclaration::new("Account.close"));
    }
}
