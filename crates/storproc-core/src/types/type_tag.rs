//! Type tags for procedure parameters and method results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The SQL-facing type of a procedure parameter or method result.
///
/// [`TypeTag::Void`] is the "no value" sentinel. A nullable wrapper around
/// `Void` is treated the same way, see [`TypeTag::is_void`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeTag {
    /// No value.
    #[default]
    Void,
    /// Boolean.
    Boolean,
    /// 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Character data.
    Text,
    /// Binary data.
    Bytes,
    /// Date and time.
    Timestamp,
    /// A result set iterated through a cursor.
    Cursor,
    /// A user-defined or driver-specific type, by name.
    Named(String),
    /// A possibly-null value of the inner type.
    Nullable(Box<TypeTag>),
}

impl TypeTag {
    /// Creates a named type tag.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type tag as nullable.
    #[must_use]
    pub fn nullable(inner: TypeTag) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Returns true for the "no value" sentinel or any nullable wrapper of it.
    #[must_use]
    pub fn is_void(&self) -> bool {
        match self {
            Self::Void => true,
            Self::Nullable(inner) => inner.is_void(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("VOID"),
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Integer => f.write_str("INTEGER"),
            Self::Float => f.write_str("FLOAT"),
            Self::Text => f.write_str("TEXT"),
            Self::Bytes => f.write_str("BYTES"),
            Self::Timestamp => f.write_str("TIMESTAMP"),
            Self::Cursor => f.write_str("CURSOR"),
            Self::Named(name) => f.write_str(name),
            Self::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}
