//! Custom resolver functions and the per-schema registry that names them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use mapme_model::{AttributeSource, ResolutionError, Resolved};
use thiserror::Error;

use crate::Context;

/// Errors a resolver function may return.
///
/// `Resolution` failures are mapping-data errors and get normalized by
/// [`build_from_model`](crate::build_from_model). Anything else is a defect
/// in the resolver and propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResolverError {
    pub fn other(message: impl fmt::Display + fmt::Debug + Send + Sync + 'static) -> Self {
        ResolverError::Other(anyhow::Error::msg(message))
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, ResolverError::Resolution(_))
    }
}

type ResolverFn =
    dyn Fn(&dyn AttributeSource, Resolved, &Context) -> Result<Resolved, ResolverError> + Send + Sync;

/// A function computing a field's value from the whole source.
///
/// It receives the source, the field's default (absent when the field has
/// none), and the context filtered down to the declared parameter names.
/// Returning `Resolved::Absent` leaves the field to its destination default.
#[derive(Clone)]
pub struct Resolver {
    func: Arc<ResolverFn>,
    params: Vec<String>,
}

impl Resolver {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&dyn AttributeSource, Resolved, &Context) -> Result<Resolved, ResolverError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            func: Arc::new(func),
            params: Vec::new(),
        }
    }

    /// Declares the context keys this resolver accepts.
    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn accepts(&self, param: &str) -> bool {
        self.params.iter().any(|p| p == param)
    }

    /// Invokes the function with the context narrowed to [`Self::params`].
    pub fn call(
        &self,
        source: &dyn AttributeSource,
        default: Resolved,
        context: &Context,
    ) -> Result<Resolved, ResolverError> {
        let filtered = context.select(self.params.as_slice());
        (self.func)(source, default, &filtered)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// How a function-located field names its resolver.
#[derive(Debug, Clone)]
pub enum ResolverRef {
    /// The resolver is attached to the field directly.
    Direct(Resolver),
    /// Looked up by name in the schema's registry at mapping time.
    Named(String),
}

impl ResolverRef {
    pub fn resolve<'a>(&'a self, registry: &'a ResolverRegistry) -> Option<&'a Resolver> {
        match self {
            ResolverRef::Direct(resolver) => Some(resolver),
            ResolverRef::Named(name) => registry.get(name),
        }
    }
}

/// Named resolvers belonging to one destination schema.
#[derive(Debug, Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Resolver>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, resolver: Resolver) -> Self {
        self.register(name, resolver);
        self
    }

    /// Registers `resolver` under `name`, returning any resolver it replaced.
    pub fn register(&mut self, name: impl Into<String>, resolver: Resolver) -> Option<Resolver> {
        self.resolvers.insert(name.into(), resolver)
    }

    pub fn get(&self, name: &str) -> Option<&Resolver> {
        self.resolvers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
