//! Declarative field-resolution engine.
//!
//! Builds a typed destination model from a source object:
//! - [`MappingSchema`] — the destination's field descriptors plus its named resolvers
//! - [`FieldDescriptor`] / [`Locator`] — where each field's value comes from
//!   (a dotted path, a resolver function, or the same-named attribute)
//! - [`FieldResolver`] — resolves one field to a present or absent value
//! - [`build_from_model`] — resolves every field, deserializes the destination
//!   from the collected payload, and normalizes failures into
//!   [`MappingValidationError`]
//! - [`MappingModel`] — the same entry points as associated functions on the
//!   destination type
//!
//! The destination's serde `Deserialize` impl is its validating constructor,
//! so fields that resolve to nothing fall back to their serde defaults.

mod context;
mod descriptor;
mod error;
mod field;
mod mapper;
mod model;
mod resolver;
mod schema;

pub use context::Context;
pub use descriptor::{FieldDescriptor, FieldMetadata, Locator};
pub use error::{
    ConstructError, MappingCause, MappingError, MappingValidationError, RawMappingError,
    ResolveFailure, SchemaError,
};
pub use field::FieldResolver;
pub use mapper::{Payload, build_from_model, construct, map_fields_from_model, map_from_model};
pub use model::MappingModel;
pub use resolver::{Resolver, ResolverError, ResolverRef, ResolverRegistry};
pub use schema::{FieldSpec, MappingSchema, MappingSchemaBuilder, SchemaSpec};

pub use mapme_model::{AttributePath, AttributeSource, ResolutionError, Resolved, SourceModel};
