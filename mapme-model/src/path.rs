//! Separator-delimited attribute paths (e.g. `user_info.first_name`).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{AttributeSource, ResolutionError, Resolved, Result};

/// Separator used when a path does not declare its own.
pub const DEFAULT_SEPARATOR: &str = ".";

/// An ordered chain of attribute names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    raw: String,
    separator: String,
    segments: Vec<String>,
}

impl AttributePath {
    /// Parses a path split on [`DEFAULT_SEPARATOR`].
    pub fn parse(path: &str) -> Result<Self> {
        Self::with_separator(path, DEFAULT_SEPARATOR)
    }

    /// Parses a path split on a custom separator.
    pub fn with_separator(path: &str, separator: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(ResolutionError::EmptyPath);
        }
        if separator.is_empty() {
            return Err(ResolutionError::EmptySeparator);
        }
        Ok(Self {
            raw: path.to_string(),
            separator: separator.to_string(),
            segments: path.split(separator).map(str::to_string).collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walks the path from `source`, one attribute lookup per segment.
    ///
    /// A missing attribute (or a `null` along the way) short-circuits the
    /// whole walk to [`Resolved::Absent`]. Looking up a segment on a scalar
    /// or array fails with [`ResolutionError::NotAttributeBearing`].
    pub fn walk<'a, S: AttributeSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> Result<Resolved<&'a Value>> {
        let mut segments = self.segments.iter();
        let Some(first) = segments.next() else {
            return Err(ResolutionError::EmptyPath);
        };
        let Some(mut current) = source.get_attribute(first)? else {
            return Ok(Resolved::Absent);
        };
        for segment in segments {
            match current.get_attribute(segment)? {
                Some(next) => current = next,
                None => return Ok(Resolved::Absent),
            }
        }
        Ok(Resolved::Present(current))
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for AttributePath {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
