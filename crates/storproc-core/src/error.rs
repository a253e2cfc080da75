//! Error types for procedure attribute resolution.

use thiserror::Error;

/// Errors that can occur while resolving procedure attributes.
///
/// Every variant stems from static configuration, so retrying with the same
/// inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A required input was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No procedure name could be derived for an ad-hoc method.
    #[error("could not determine name of procedure for method '{entity}.{method}'")]
    Configuration {
        /// The owning entity's logical name.
        entity: String,
        /// The method's simple name.
        method: String,
    },

    /// A declaration catalog document could not be read.
    #[error("invalid declaration catalog: {0}")]
    Catalog(String),
}

impl ResolveError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a configuration error for the given entity and method.
    #[must_use]
    pub fn configuration(entity: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Configuration { entity: entity.into(), method: method.into() }
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
