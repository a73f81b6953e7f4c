//! Handler binding.
//!
//! # Responsibilities
//! - Pair each route's raw pattern with its handler
//! - Hand those pairs to an external router, in registry order
//!
//! # Design Decisions
//! - The pattern is passed through untouched; axum 0.8 matches on the same
//!   `{name}` syntax the templates use
//! - Handlers are opaque here: stored, moved and handed over, never called

use axum::routing::MethodRouter;
use indexmap::IndexMap;

use crate::routing::descriptor::RouteDescriptor;
use crate::routing::registry::RouteRegistry;

/// A route's raw pattern and its handler, borrowed from the registry.
#[derive(Debug)]
pub struct HandlerBinding<'a, H> {
    pub name: &'a str,
    pub pattern: &'a str,
    pub handler: &'a H,
}

/// An owned `(pattern, handler)` pair, detached from its registry.
#[derive(Debug)]
pub struct OwnedBinding<H> {
    pub name: String,
    pub pattern: String,
    pub handler: H,
}

impl<H> RouteRegistry<H> {
    /// Routes carrying a handler, in registry order.
    pub fn bindings(&self) -> impl Iterator<Item = HandlerBinding<'_, H>> {
        self.iter().filter_map(|descriptor| {
            descriptor.handler().map(|handler| HandlerBinding {
                name: descriptor.name(),
                pattern: descriptor.pattern(),
                handler,
            })
        })
    }

    /// Move the handlers out, keeping a handler-less registry for URL building.
    pub fn split_handlers(self) -> (RouteRegistry, Vec<OwnedBinding<H>>) {
        let mut routes = IndexMap::with_capacity(self.len());
        let mut bindings = Vec::new();

        for descriptor in self.into_descriptors() {
            let name = descriptor.name().to_string();
            let link = RouteDescriptor::from_template(name.clone(), descriptor.template().clone());
            let pattern = descriptor.pattern().to_string();

            if let Some(handler) = descriptor.into_handler() {
                bindings.push(OwnedBinding {
                    name: name.clone(),
                    pattern,
                    handler,
                });
            }
            routes.insert(name, link);
        }

        (RouteRegistry::from_descriptors(routes), bindings)
    }
}

/// Registers route bindings on an [`axum::Router`].
///
/// Panics the way [`axum::Router::route`] does when a pattern is not
/// accepted by axum or overlaps an existing route.
pub trait BindRegistry<S>: Sized {
    /// Register every handler of `registry`, cloning the method routers.
    fn bind_registry(self, registry: &RouteRegistry<MethodRouter<S>>) -> Self;

    /// Register detached bindings, as produced by [`RouteRegistry::split_handlers`].
    fn bind_handlers<I>(self, bindings: I) -> Self
    where
        I: IntoIterator<Item = OwnedBinding<MethodRouter<S>>>;
}

impl<S> BindRegistry<S> for axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn bind_registry(self, registry: &RouteRegistry<MethodRouter<S>>) -> Self {
        registry.bindings().fold(self, |router, binding| {
            tracing::debug!(name = %binding.name, pattern = %binding.pattern, "Binding handler");
            router.route(binding.pattern, binding.handler.clone())
        })
    }

    fn bind_handlers<I>(self, bindings: I) -> Self
    where
        I: IntoIterator<Item = OwnedBinding<MethodRouter<S>>>,
    {
        bindings.into_iter().fold(self, |router, binding| {
            tracing::debug!(name = %binding.name, pattern = %binding.pattern, "Binding handler");
            router.route(&binding.pattern, binding.handler)
        })
    }
}
