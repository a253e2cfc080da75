//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`AttributeSource`](super::AttributeSource).
///
/// Configuration only affects diagnostics. The resolved attributes are the
/// same for every configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Log a warning when more than one declaration matches the lookup key.
    /// The first match is used either way.
    ///
    /// Default: true
    pub warn_on_duplicate_declarations: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { warn_on_duplicate_declarations: true }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether duplicate declaration names are reported.
    #[must_use]
    pub fn with_warn_on_duplicate_declarations(mut self, warn: bool) -> Self {
        self.warn_on_duplicate_declarations = warn;
        self
    }
}
