//! Error types for the mapping engine.

use mapme_model::ResolutionError;
use thiserror::Error;

use crate::ResolverError;

/// Serde failure annotated with the path of the offending destination field.
pub type ConstructError = serde_path_to_error::Error<serde_json::Error>;

/// A field whose resolution failed, with the underlying cause.
#[derive(Debug, Error)]
#[error("failed to resolve field '{field}': {source}")]
pub struct ResolveFailure {
    pub field: String,
    pub source: ResolverError,
}

/// Un-normalized failure of [`map_from_model`](crate::map_from_model).
#[derive(Debug, Error)]
pub enum RawMappingError {
    #[error(transparent)]
    Resolve(#[from] ResolveFailure),

    #[error("model validation failed: {0}")]
    Construct(#[from] ConstructError),
}

/// The underlying error wrapped by a [`MappingValidationError`].
#[derive(Debug, Error)]
pub enum MappingCause {
    /// An attribute lookup failed while resolving a field.
    #[error(transparent)]
    Resolution(ResolutionError),

    /// The destination rejected the resolved payload.
    #[error(transparent)]
    Validation(ConstructError),
}

/// The single error kind surfaced for input that could not be mapped.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct MappingValidationError {
    message: String,
    field: Option<String>,
    #[source]
    cause: MappingCause,
}

impl MappingValidationError {
    pub(crate) fn resolution(field: String, cause: ResolutionError) -> Self {
        Self {
            message: format!("failed to map field '{field}': {cause}"),
            field: Some(field),
            cause: MappingCause::Resolution(cause),
        }
    }

    pub(crate) fn validation(cause: ConstructError) -> Self {
        let path = cause.path().to_string();
        let field = (path != "?" && path != ".").then_some(path);
        Self {
            message: format!("model validation failed: {cause}"),
            field,
            cause: MappingCause::Validation(cause),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The destination field (or payload path) the failure is attributed to.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn cause(&self) -> &MappingCause {
        &self.cause
    }

    pub fn into_cause(self) -> MappingCause {
        self.cause
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.cause, MappingCause::Validation(_))
    }
}

/// Errors from [`build_from_model`](crate::build_from_model).
#[derive(Debug, Error)]
pub enum MappingError {
    /// The input could not be mapped.
    #[error(transparent)]
    Validation(#[from] MappingValidationError),

    /// A resolver function failed for a reason other than attribute lookup.
    #[error("resolver for field '{field}' failed: {source}")]
    Resolver {
        field: String,
        source: anyhow::Error,
    },
}

impl MappingError {
    pub fn as_validation(&self) -> Option<&MappingValidationError> {
        match self {
            MappingError::Validation(err) => Some(err),
            MappingError::Resolver { .. } => None,
        }
    }
}

/// Errors raised while assembling a [`MappingSchema`](crate::MappingSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate field '{0}'")]
    DuplicateField(String),

    #[error("invalid source path for field '{field}': {source}")]
    InvalidPath {
        field: String,
        source: ResolutionError,
    },

    #[error("schema deserialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
