//! Route registry.
//!
//! # Responsibilities
//! - Collect every declared route once, at start-up
//! - Reject two routes claiming the same name
//! - Serve lookups by name or by route type
//!
//! # Design Decisions
//! - Immutable after `build()` (shared via `Arc`, read without locks)
//! - Insertion order is kept; handlers are bound in that order
//! - Declaration errors are deferred to `build()` so the builder chains

use std::sync::Arc;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::routing::descriptor::{Route, RouteDescriptor, RouteSummary};
use crate::routing::error::{RouteError, RouteResult};

/// Name-keyed, insertion-ordered collection of route descriptors.
#[derive(Debug, Clone)]
pub struct RouteRegistry<H = ()> {
    routes: IndexMap<String, RouteDescriptor<H>>,
}

impl<H> RouteRegistry<H> {
    pub fn builder() -> RegistryBuilder<H> {
        RegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor<H>> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Typed lookup: the route registered under `R::NAME` with `R::PATTERN`.
    ///
    /// The returned route shares the registered template.
    pub fn route<R: Route>(&self) -> RouteResult<R> {
        let descriptor = self
            .routes
            .get(R::NAME)
            .filter(|descriptor| descriptor.pattern() == R::PATTERN)
            .ok_or_else(|| RouteError::UnknownRoute(R::NAME.to_string()))?;

        R::with_template(Arc::clone(descriptor.template()))
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<H>> {
        self.routes.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.iter().map(RouteDescriptor::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn into_descriptors(self) -> impl Iterator<Item = RouteDescriptor<H>> {
        self.routes.into_values()
    }

    pub(crate) fn from_descriptors(routes: IndexMap<String, RouteDescriptor<H>>) -> Self {
        Self { routes }
    }
}

/// Collects route declarations; see [`RouteRegistry::builder`].
#[derive(Debug)]
pub struct RegistryBuilder<H = ()> {
    pending: Vec<RouteResult<RouteDescriptor<H>>>,
}

impl<H> Default for RegistryBuilder<H> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<H> RegistryBuilder<H> {
    /// Register an already declared typed route with its handler.
    pub fn bind<R: Route>(self, route: &R, handler: H) -> Self {
        self.descriptor(RouteDescriptor::from_route(route).with_handler(handler))
    }

    /// Declare a typed route and register it with its handler.
    pub fn route<R: Route>(mut self, handler: H) -> Self {
        self.pending.push(
            R::declare().map(|route| RouteDescriptor::from_route(&route).with_handler(handler)),
        );
        self
    }

    /// Declare a typed route without a handler, for URL building only.
    pub fn link<R: Route>(mut self) -> Self {
        self.pending
            .push(R::declare().map(|route| RouteDescriptor::from_route(&route)));
        self
    }

    /// Register a handler-less route declared at runtime.
    pub fn pattern(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.pending.push(RouteDescriptor::new(name, pattern));
        self
    }

    pub fn descriptor(mut self, descriptor: RouteDescriptor<H>) -> Self {
        self.pending.push(Ok(descriptor));
        self
    }

    /// Freeze the registry.
    ///
    /// Reports the first failing declaration, in declaration order: a
    /// [`RouteError::MalformedTemplate`] or a [`RouteError::DuplicateRouteName`].
    pub fn build(self) -> RouteResult<RouteRegistry<H>> {
        let mut routes = IndexMap::with_capacity(self.pending.len());

        for descriptor in self.pending {
            let descriptor = descriptor?;
            match routes.entry(descriptor.name().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(RouteError::DuplicateRouteName(entry.key().clone()));
                }
                Entry::Vacant(slot) => {
                    tracing::debug!(
                        name = %descriptor.name(),
                        pattern = %descriptor.pattern(),
                        has_handler = descriptor.handler().is_some(),
                        "Route registered"
                    );
                    slot.insert(descriptor);
                }
            }
        }

        tracing::info!(routes = routes.len(), "Route registry built");
        Ok(RouteRegistry::from_descriptors(routes))
    }
}
