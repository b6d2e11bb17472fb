use serde::Serialize;
use serde_json::{Map, Value};

use crate::{AttributePath, ResolutionError, Resolved, Result};

/// Named attribute lookup over a source representation.
///
/// Implementations return:
/// - `Ok(Some(value))` when the attribute exists,
/// - `Ok(None)` when it does not, or when the receiver itself is `null`,
/// - `Err(ResolutionError::NotAttributeBearing)` when the value cannot carry
///   attributes at all.
///
/// Path walking and the mapping engine depend only on this capability.
pub trait AttributeSource {
    fn get_attribute(&self, name: &str) -> Result<Option<&Value>>;

    /// Walks `path` starting from this source.
    fn resolve_path(&self, path: &AttributePath) -> Result<Resolved<&Value>> {
        path.walk(self)
    }

    /// Extract a string attribute, `None` if missing or not a string.
    fn get_str(&self, name: &str) -> Result<Option<&str>> {
        Ok(self.get_attribute(name)?.and_then(Value::as_str))
    }

    /// Extract a boolean attribute, `None` if missing or not a bool.
    fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        Ok(self.get_attribute(name)?.and_then(Value::as_bool))
    }

    /// Extract a numeric attribute, `None` if missing or not a number.
    fn get_number(&self, name: &str) -> Result<Option<f64>> {
        Ok(self.get_attribute(name)?.and_then(Value::as_f64))
    }
}

impl AttributeSource for Value {
    fn get_attribute(&self, name: &str) -> Result<Option<&Value>> {
        match self {
            Value::Object(map) => Ok(map.get(name)),
            Value::Null => Ok(None),
            other => Err(ResolutionError::NotAttributeBearing {
                kind: value_kind(other),
                attribute: name.to_string(),
            }),
        }
    }
}

impl AttributeSource for Map<String, Value> {
    fn get_attribute(&self, name: &str) -> Result<Option<&Value>> {
        Ok(self.get(name))
    }
}

impl<S: AttributeSource + ?Sized> AttributeSource for &S {
    fn get_attribute(&self, name: &str) -> Result<Option<&Value>> {
        (**self).get_attribute(name)
    }
}

/// Short type name of a JSON value, used in lookup errors.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// A read-only snapshot of a source model.
///
/// Any `Serialize` type can be captured; its serialized form is what the
/// mapping engine walks. Structs become objects keyed by field name, so
/// attribute lookup follows the struct's serde field names.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceModel {
    value: Value,
}

impl SourceModel {
    /// Captures `model` through its `Serialize` implementation.
    pub fn from_serialize<T: Serialize + ?Sized>(model: &T) -> Result<Self> {
        Ok(Self {
            value: serde_json::to_value(model)?,
        })
    }

    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for SourceModel {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl AttributeSource for SourceModel {
    fn get_attribute(&self, name: &str) -> Result<Option<&Value>> {
        self.value.get_attribute(name)
    }
}
