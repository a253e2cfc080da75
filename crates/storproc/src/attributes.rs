//! Resolved stored procedure attributes.

use serde::Serialize;
use storproc_core::{has_text, ParameterSpec, ResolveError, ResolveResult};

/// Name prefix given to unnamed output parameters of ad-hoc procedures.
pub const SYNTHETIC_OUTPUT_PARAMETER_NAME: &str = "out";

/// The invocation metadata of a stored procedure: its name and output parameters.
///
/// Values are immutable once built. For ad-hoc procedures every blank output
/// parameter name is replaced on construction with a positional synthetic
/// name (`out`, `out1`, `out2`, ...). Named procedures keep their declared
/// names verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcedureAttributes {
    procedure_name: String,
    output_parameters: Vec<ParameterSpec>,
    named_stored_procedure: bool,
}

impl ProcedureAttributes {
    /// Creates procedure attributes, completing parameter names for ad-hoc procedures.
    ///
    /// Fails if `procedure_name` is blank.
    pub fn new(
        procedure_name: impl Into<String>,
        output_parameters: Vec<ParameterSpec>,
        named_stored_procedure: bool,
    ) -> ResolveResult<Self> {
        let procedure_name = procedure_name.into();
        if !has_text(Some(procedure_name.as_str())) {
            return Err(ResolveError::invalid_input("procedure name must not be blank"));
        }

        let output_parameters = if named_stored_procedure {
            output_parameters
        } else {
            with_completed_names(output_parameters)
        };

        Ok(Self { procedure_name, output_parameters, named_stored_procedure })
    }

    /// Creates attributes for an ad-hoc procedure with a single output parameter.
    pub fn ad_hoc(
        procedure_name: impl Into<String>,
        parameter: ParameterSpec,
    ) -> ResolveResult<Self> {
        Self::new(procedure_name, vec![parameter], false)
    }

    /// Returns the name of the stored procedure.
    #[must_use]
    pub fn procedure_name(&self) -> &str {
        &self.procedure_name
    }

    /// Returns true if the attributes came from a named declaration.
    #[must_use]
    pub fn is_named_stored_procedure(&self) -> bool {
        self.named_stored_procedure
    }

    /// Returns the output parameters in call order.
    #[must_use]
    pub fn output_parameters(&self) -> &[ParameterSpec] {
        &self.output_parameters
    }

    /// Returns the output parameter names in call order.
    #[must_use]
    pub fn output_parameter_names(&self) -> Vec<Option<&str>> {
        self.output_parameters.iter().map(ParameterSpec::name).collect()
    }

    /// Returns whether the stored procedure produces a result.
    ///
    /// This is false when there are no output parameters or the first one is
    /// of the "no value" type.
    #[must_use]
    pub fn has_return_value(&self) -> bool {
        self.output_parameters.first().is_some_and(|p| !p.ty.is_void())
    }
}

fn with_completed_names(parameters: Vec<ParameterSpec>) -> Vec<ParameterSpec> {
    parameters
        .into_iter()
        .enumerate()
        .map(|(i, param)| {
            if has_text(param.name()) {
                param
            } else {
                param.with_name(synthetic_parameter_name(i))
            }
        })
        .collect()
}

/// The synthetic name for an unnamed output parameter at `position`.
#[must_use]
pub fn synthetic_parameter_name(position: usize) -> String {
    if position == 0 {
        SYNTHETIC_OUTPUT_PARAMETER_NAME.to_string()
    } else {
        format!("{SYNTHETIC_OUTPUT_PARAMETER_NAME}{position}")
    }
}
