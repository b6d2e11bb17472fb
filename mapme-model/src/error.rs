//! Error types for attribute resolution.

use thiserror::Error;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Errors raised while looking up attributes on a source.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// An attribute was looked up on a value that cannot carry attributes
    /// (a string, number, bool or array).
    #[error("'{kind}' object has no attribute '{attribute}'")]
    NotAttributeBearing {
        kind: &'static str,
        attribute: String,
    },

    /// A path with no characters was supplied.
    #[error("attribute path is empty")]
    EmptyPath,

    /// A path separator with no characters was supplied.
    #[error("attribute path separator is empty")]
    EmptySeparator,

    /// A `Serialize` source could not be captured as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResolutionError {
    /// Returns the attribute name when this is a lookup against a
    /// non-attribute-bearing value.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            ResolutionError::NotAttributeBearing { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}
