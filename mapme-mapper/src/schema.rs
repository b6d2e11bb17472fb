use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FieldDescriptor, FieldMetadata, Resolver, ResolverRegistry, SchemaError};

/// The field descriptors of one destination type plus its named resolvers.
///
/// Immutable once built; share it freely between threads and calls.
#[derive(Debug, Clone, Default)]
pub struct MappingSchema {
    fields: Vec<FieldDescriptor>,
    resolvers: ResolverRegistry,
}

impl MappingSchema {
    pub fn builder() -> MappingSchemaBuilder {
        MappingSchemaBuilder::default()
    }

    /// Loads field declarations from JSON, resolving `source_func` names
    /// against `resolvers`.
    pub fn from_json(json: &str, resolvers: ResolverRegistry) -> Result<Self, SchemaError> {
        let spec: SchemaSpec = serde_json::from_str(json)?;
        Self::from_spec(spec, resolvers)
    }

    pub fn from_value(value: Value, resolvers: ResolverRegistry) -> Result<Self, SchemaError> {
        let spec: SchemaSpec = serde_json::from_value(value)?;
        Self::from_spec(spec, resolvers)
    }

    pub fn from_spec(spec: SchemaSpec, resolvers: ResolverRegistry) -> Result<Self, SchemaError> {
        let mut builder = Self::builder().resolvers(resolvers);
        for field in spec.fields {
            builder = builder.field(FieldDescriptor::from_metadata(
                field.name,
                field.default,
                field.metadata.as_ref(),
            )?);
        }
        builder.build()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }
}

/// Collects descriptors and resolvers; [`build`](Self::build) checks names
/// are unique.
#[derive(Debug, Default)]
pub struct MappingSchemaBuilder {
    fields: Vec<FieldDescriptor>,
    resolvers: ResolverRegistry,
}

impl MappingSchemaBuilder {
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    #[must_use]
    pub fn resolver(mut self, name: impl Into<String>, resolver: Resolver) -> Self {
        self.resolvers.register(name, resolver);
        self
    }

    /// Replaces the registry wholesale.
    #[must_use]
    pub fn resolvers(mut self, resolvers: ResolverRegistry) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn build(self) -> Result<MappingSchema, SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(MappingSchema {
            fields: self.fields,
            resolvers: self.resolvers,
        })
    }
}

/// JSON form of a schema: `{"fields": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpec {
    pub fields: Vec<FieldSpec>,
}

/// JSON form of a single field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FieldMetadata>,
}
