use mapme_model::{AttributeSource, Resolved};
use tracing::{debug, warn};

use crate::{Context, FieldDescriptor, Locator, ResolverError, ResolverRegistry};

/// Resolves single destination fields against a source.
///
/// Borrowing the registry keeps named-resolver lookup tied to the schema the
/// descriptor came from.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'r> {
    resolvers: &'r ResolverRegistry,
}

impl<'r> FieldResolver<'r> {
    pub fn new(resolvers: &'r ResolverRegistry) -> Self {
        Self { resolvers }
    }

    /// Computes the value of `descriptor` from `source`.
    ///
    /// Missing data resolves to [`Resolved::Absent`]. Errors come from
    /// looking up attributes on non-attribute-bearing values, or from a
    /// resolver function.
    pub fn resolve(
        &self,
        descriptor: &FieldDescriptor,
        source: &dyn AttributeSource,
        context: &Context,
    ) -> Result<Resolved, ResolverError> {
        let resolved = match descriptor.locator() {
            Locator::Path(path) => path.walk(source)?.cloned(),
            Locator::Function(resolver_ref) => match resolver_ref.resolve(self.resolvers) {
                Some(resolver) => resolver.call(source, descriptor.resolver_default(), context)?,
                None => {
                    warn!(
                        field = %descriptor.name(),
                        resolver = ?resolver_ref,
                        "Resolver not registered, leaving field to its default"
                    );
                    Resolved::Absent
                }
            },
            Locator::Implicit => source.get_attribute(descriptor.name())?.cloned().into(),
        };
        debug!(
            field = %descriptor.name(),
            locator = descriptor.locator().kind(),
            present = resolved.is_present(),
            "Field resolved"
        );
        Ok(resolved)
    }
}
