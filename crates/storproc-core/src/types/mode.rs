//! Parameter transfer modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a procedure parameter is transferred between caller and database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterMode {
    /// Passed from the caller to the procedure.
    In,
    /// Produced by the procedure.
    Out,
    /// Passed in and produced.
    #[serde(rename = "INOUT")]
    InOut,
    /// A server-side cursor handle returned for row iteration.
    RefCursor,
}

impl ParameterMode {
    /// Returns true if the procedure produces a value through this mode.
    #[must_use]
    pub const fn is_output(self) -> bool {
        match self {
            Self::Out | Self::InOut | Self::RefCursor => true,
            Self::In => false,
        }
    }

    /// The mode of a parameter built from a method directive.
    #[must_use]
    pub const fn for_result(ref_cursor: bool) -> Self {
        if ref_cursor {
            Self::RefCursor
        } else {
            Self::Out
        }
    }
}

impl fmt::Display for ParameterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "INOUT",
            Self::RefCursor => "REF_CURSOR",
        };
        f.write_str(name)
    }
}
