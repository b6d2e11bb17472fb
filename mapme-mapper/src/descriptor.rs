use mapme_model::{AttributePath, DEFAULT_SEPARATOR, Resolved};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Resolver, ResolverRef, SchemaError};

/// Where a destination field's value comes from.
#[derive(Debug, Clone)]
pub enum Locator {
    /// A chain of attribute lookups into the source.
    Path(AttributePath),
    /// A resolver function computing the value from the whole source.
    Function(ResolverRef),
    /// The source attribute with the same name as the field.
    Implicit,
}

impl Locator {
    pub fn kind(&self) -> &'static str {
        match self {
            Locator::Path(_) => "path",
            Locator::Function(_) => "function",
            Locator::Implicit => "implicit",
        }
    }
}

/// Per-field locator metadata as declared alongside a destination field.
///
/// A non-empty `source` takes precedence over `source_func`; with neither,
/// the field is located implicitly by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_sep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_func: Option<String>,
}

/// One destination field: its name, its locator and its declared default.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    locator: Locator,
    default: Option<Value>,
}

impl FieldDescriptor {
    fn new(name: impl Into<String>, locator: Locator) -> Self {
        Self {
            name: name.into(),
            locator,
            default: None,
        }
    }

    /// A field read from the same-named source attribute.
    pub fn implicit(name: impl Into<String>) -> Self {
        Self::new(name, Locator::Implicit)
    }

    /// A field read through a `.`-separated path.
    pub fn path(name: impl Into<String>, path: &str) -> Result<Self, SchemaError> {
        Self::path_with_separator(name, path, DEFAULT_SEPARATOR)
    }

    /// A field read through a path split on a custom separator.
    pub fn path_with_separator(
        name: impl Into<String>,
        path: &str,
        separator: &str,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let path = AttributePath::with_separator(path, separator).map_err(|source| {
            SchemaError::InvalidPath {
                field: name.clone(),
                source,
            }
        })?;
        Ok(Self::new(name, Locator::Path(path)))
    }

    /// A field computed by a resolver attached directly to it.
    pub fn function(name: impl Into<String>, resolver: Resolver) -> Self {
        Self::new(name, Locator::Function(ResolverRef::Direct(resolver)))
    }

    /// A field computed by a resolver looked up by name in the schema registry.
    pub fn named(name: impl Into<String>, resolver: impl Into<String>) -> Self {
        Self::new(name, Locator::Function(ResolverRef::Named(resolver.into())))
    }

    /// Builds a descriptor from declared metadata.
    pub fn from_metadata(
        name: impl Into<String>,
        default: Option<Value>,
        metadata: Option<&FieldMetadata>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let meta = metadata.cloned().unwrap_or_default();
        let descriptor = match (non_empty(meta.source), non_empty(meta.source_func)) {
            (Some(source), _) => {
                let sep = meta.source_sep.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
                Self::path_with_separator(name, &source, &sep)?
            }
            (None, Some(func)) => Self::named(name, func),
            (None, None) => Self::implicit(name),
        };
        Ok(match default {
            Some(default) => descriptor.with_default(default),
            None => descriptor,
        })
    }

    /// Sets the declared default handed to resolver functions.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The `default` argument for resolver functions: present only when a
    /// truthy default was declared. Falsy defaults (`null`, `false`, `0`,
    /// `""`, `[]`, `{}`) are passed as absent.
    pub fn resolver_default(&self) -> Resolved {
        match &self.default {
            Some(value) if is_truthy(value) => Resolved::Present(value.clone()),
            _ => Resolved::Absent,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
