use mapme_model::AttributeSource;
use serde::de::DeserializeOwned;

use crate::{Context, MappingError, MappingSchema, RawMappingError};

/// A destination type that knows its own mapping schema.
///
/// Implementors usually keep the schema in a `OnceLock` so it is built once
/// and shared by every mapping call.
pub trait MappingModel: DeserializeOwned {
    fn mapping_schema() -> &'static MappingSchema;

    /// See [`crate::build_from_model`].
    fn build_from_model(
        source: &dyn AttributeSource,
        context: Option<&Context>,
    ) -> Result<Self, MappingError> {
        crate::build_from_model(Self::mapping_schema(), source, context)
    }

    /// See [`crate::map_from_model`].
    fn map_from_model(
        source: &dyn AttributeSource,
        context: Option<&Context>,
    ) -> Result<Self, RawMappingError> {
        let empty = Context::new();
        crate::map_from_model(Self::mapping_schema(), source, context.unwrap_or(&empty))
    }
}
