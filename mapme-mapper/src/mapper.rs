//! Orchestration: resolve every field, construct the destination, normalize
//! failures.

use mapme_model::AttributeSource;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use crate::{
    Context, FieldResolver, MappingError, MappingSchema, MappingValidationError, RawMappingError,
    ResolveFailure, ResolverError,
};

/// Destination field name to resolved value, for present fields only.
pub type Payload = Map<String, Value>;

/// Resolves every field of `schema`, keeping only present values.
pub fn map_fields_from_model(
    schema: &MappingSchema,
    source: &dyn AttributeSource,
    context: &Context,
) -> Result<Payload, ResolveFailure> {
    let resolver = FieldResolver::new(schema.resolvers());
    let mut payload = Payload::new();
    for descriptor in schema.fields() {
        let resolved = resolver
            .resolve(descriptor, source, context)
            .map_err(|err| ResolveFailure {
                field: descriptor.name().to_string(),
                source: err,
            })?;
        if let Some(value) = resolved.present() {
            payload.insert(descriptor.name().to_string(), value);
        }
    }
    Ok(payload)
}

/// Runs the destination's validating constructor over a payload.
pub fn construct<T: DeserializeOwned>(payload: Payload) -> Result<T, RawMappingError> {
    Ok(serde_path_to_error::deserialize(Value::Object(payload))?)
}

/// Resolves and constructs without normalizing failures.
pub fn map_from_model<T: DeserializeOwned>(
    schema: &MappingSchema,
    source: &dyn AttributeSource,
    context: &Context,
) -> Result<T, RawMappingError> {
    let payload = map_fields_from_model(schema, source, context)?;
    construct(payload)
}

/// Builds a validated `T` from `source`.
///
/// Attribute-lookup failures and destination validation failures both
/// surface as [`MappingError::Validation`]. Other resolver failures are
/// returned as [`MappingError::Resolver`].
pub fn build_from_model<T: DeserializeOwned>(
    schema: &MappingSchema,
    source: &dyn AttributeSource,
    context: Option<&Context>,
) -> Result<T, MappingError> {
    let empty = Context::new();
    map_from_model(schema, source, context.unwrap_or(&empty)).map_err(normalize)
}

fn normalize(err: RawMappingError) -> MappingError {
    match err {
        RawMappingError::Resolve(ResolveFailure {
            field,
            source: ResolverError::Resolution(cause),
        }) => {
            error!(field = %field, "Failed to map model due to error. Reason: {}", cause);
            MappingValidationError::resolution(field, cause).into()
        }
        RawMappingError::Resolve(ResolveFailure {
            field,
            source: ResolverError::Other(source),
        }) => MappingError::Resolver { field, source },
        RawMappingError::Construct(cause) => {
            error!(
                "Failed to map model due to model validation error. Reason: {}",
                cause
            );
            MappingValidationError::validation(cause).into()
        }
    }
}
