//! Source-side data model for mapme.
//!
//! Defines the types the field-resolution engine reads source data through:
//! - [`AttributeSource`] — named attribute lookup, implemented per source representation
//! - [`SourceModel`] — a captured snapshot of any `Serialize` value
//! - [`AttributePath`] — a separator-delimited chain of attribute names
//! - [`Resolved`] — a present-or-absent value, distinct from JSON `null`
//!
//! Nothing in this crate mutates a source. Lookups either find a value, miss,
//! or fail with a [`ResolutionError`] when a value cannot carry attributes.

mod error;
mod path;
mod resolved;
mod source;

pub use error::{ResolutionError, Result};
pub use path::{AttributePath, DEFAULT_SEPARATOR};
pub use resolved::Resolved;
pub use source::{AttributeSource, SourceModel, value_kind};
