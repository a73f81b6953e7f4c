//! Route descriptors and typed URL builders.
//!
//! A route is declared once with [`route!`](crate::route):
//!
//! ```
//! use route_registry::route;
//! use route_registry::routing::{QueryParams, Route};
//!
//! route! {
//!     /// A user's profile page.
//!     pub User("/users/{id}") { id }
//! }
//!
//! let user = User::declare().unwrap();
//! assert_eq!(user.url("user123"), "/users/user123");
//! assert_eq!(
//!     user.url_with_query(7, &QueryParams::new().with("tab", "posts")),
//!     "/users/7?tab=posts"
//! );
//! ```
//!
//! The generated `url` takes exactly one argument per placeholder, named after
//! it, so a wrong or missing parameter is a compile error rather than a
//! runtime one. `declare` checks the argument list against the parsed pattern.

use std::sync::Arc;

use serde::Serialize;

use crate::routing::error::RouteResult;
use crate::routing::render::{PathParams, QueryParams};
use crate::routing::template::PathTemplate;

/// A route with a statically known name, pattern and builder signature.
///
/// Implemented by the types [`route!`](crate::route) generates.
pub trait Route: Sized {
    /// Registry key.
    const NAME: &'static str;
    /// Raw pattern, placeholders included.
    const PATTERN: &'static str;
    /// Builder argument names, in argument order.
    const PARAMETERS: &'static [&'static str];

    /// Wrap a template without checking it; use [`Route::with_template`].
    #[doc(hidden)]
    fn from_template_unchecked(template: Arc<PathTemplate>) -> Self;

    fn template(&self) -> &Arc<PathTemplate>;

    /// Wrap an already parsed template whose placeholders match
    /// [`Self::PARAMETERS`], in order.
    fn with_template(template: Arc<PathTemplate>) -> RouteResult<Self> {
        template.expect_parameters(Self::PARAMETERS)?;
        Ok(Self::from_template_unchecked(template))
    }

    /// Parse [`Self::PATTERN`] and check it against [`Self::PARAMETERS`].
    fn declare() -> RouteResult<Self> {
        Self::with_template(Arc::new(PathTemplate::parse(Self::PATTERN)?))
    }
}

/// Declare typed routes.
///
/// Each entry reads `vis Name("pattern") { param, ... }` and expands to a
/// struct implementing [`Route`](crate::routing::Route) with two builders:
/// `url(param, ...)` and `url_with_query(param, ..., &QueryParams)`.
/// Parameters are listed in the order their placeholders appear.
#[macro_export]
macro_rules! route {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident($pattern:literal) { $($param:ident),* $(,)? }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            template: ::std::sync::Arc<$crate::routing::PathTemplate>,
        }

        impl $crate::routing::Route for $name {
            const NAME: &'static str = stringify!($name);
            const PATTERN: &'static str = $pattern;
            const PARAMETERS: &'static [&'static str] = &[$(stringify!($param)),*];

            fn from_template_unchecked(
                template: ::std::sync::Arc<$crate::routing::PathTemplate>,
            ) -> Self {
                Self { template }
            }

            fn template(&self) -> &::std::sync::Arc<$crate::routing::PathTemplate> {
                &self.template
            }
        }

        impl $name {
            pub fn url(&self, $($param: impl ::std::fmt::Display),*) -> ::std::string::String {
                self.url_with_query($($param,)* &$crate::routing::QueryParams::new())
            }

            pub fn url_with_query(
                &self,
                $($param: impl ::std::fmt::Display,)*
                query: &$crate::routing::QueryParams,
            ) -> ::std::string::String {
                self.template.fill(
                    &[$(::std::string::ToString::to_string(&$param).as_str()),*],
                    query,
                )
            }
        }
    )*};
}

/// A named template with an optional request handler.
///
/// Typed routes become descriptors when registered; routes declared at runtime
/// (for instance from configuration) only exist as descriptors and build URLs
/// through the checked [`url`](Self::url).
#[derive(Debug, Clone)]
pub struct RouteDescriptor<H = ()> {
    name: String,
    template: Arc<PathTemplate>,
    handler: Option<H>,
}

impl<H> RouteDescriptor<H> {
    /// A handler-less descriptor parsed from `pattern`.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> RouteResult<Self> {
        Ok(Self {
            name: name.into(),
            template: Arc::new(PathTemplate::parse(pattern)?),
            handler: None,
        })
    }

    /// A descriptor sharing the parsed template of a typed route.
    pub fn from_route<R: Route>(route: &R) -> Self {
        Self::from_template(R::NAME, Arc::clone(route.template()))
    }

    pub(crate) fn from_template(name: impl Into<String>, template: Arc<PathTemplate>) -> Self {
        Self {
            name: name.into(),
            template,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &Arc<PathTemplate> {
        &self.template
    }

    pub fn pattern(&self) -> &str {
        self.template.pattern()
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub(crate) fn into_handler(self) -> Option<H> {
        self.handler
    }

    /// Build a URL from named bindings.
    pub fn url(&self, path: &PathParams, query: &QueryParams) -> RouteResult<String> {
        self.template.render(path, query)
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            name: self.name.clone(),
            pattern: self.pattern().to_string(),
            parameters: self.template.parameter_names().to_vec(),
            has_handler: self.handler.is_some(),
        }
    }
}

/// Serializable view of a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub pattern: String,
    pub parameters: Vec<String>,
    pub has_handler: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::error::RouteError;

    crate::route! {
        Post("/users/{user_id}/posts/{post_id}") { user_id, post_id }
        Search("/search") {}
        Swapped("/a/{first}/b/{second}") { second, first }
        Kind("/items/{type}/{ref}") { r#type, r#ref }
    }

    #[test]
    fn test_generated_constants() {
        assert_eq!(Post::NAME, "Post");
        assert_eq!(Post::PATTERN, "/users/{user_id}/posts/{post_id}");
        assert_eq!(Post::PARAMETERS, ["user_id", "post_id"]);
        assert!(Search::PARAMETERS.is_empty());
    }

    #[test]
    fn test_typed_builders() {
        let post = Post::declare().unwrap();
        assert_eq!(post.url("alice", 42), "/users/alice/posts/42");

        let search = Search::declare().unwrap();
        let query = QueryParams::new().with("q", "go").with("page", "");
        assert_eq!(search.url_with_query(&query), "/search?q=go");
        assert_eq!(search.url(), "/search");
    }

    #[test]
    fn test_declare_rejects_mismatched_parameters() {
        let err = Swapped::declare().unwrap_err();
        assert!(matches!(err, RouteError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_keyword_parameters() {
        let kind = Kind::declare().unwrap();
        assert_eq!(kind.url("book", 7), "/items/book/7");
    }

    #[test]
    fn test_with_template_checks_parameters() {
        let template = Arc::new(PathTemplate::parse("/a/{x}/{y}").unwrap());
        assert!(matches!(
            Post::with_template(template),
            Err(RouteError::MalformedTemplate { .. })
        ));

        let template = Arc::new(PathTemplate::parse("/u/{user_id}/p/{post_id}").unwrap());
        let post = Post::with_template(template).unwrap();
        assert_eq!(post.url("a", 1), "/u/a/p/1");
    }

    #[test]
    #[should_panic(expected = "one value per placeholder")]
    fn test_unchecked_template_mismatch_panics() {
        let template = Arc::new(PathTemplate::parse("/search/{q}").unwrap());
        let search = Search::from_template_unchecked(template);
        let _ = search.url();
    }

    #[test]
    fn test_dynamic_descriptor() {
        let docs: RouteDescriptor = RouteDescriptor::new("Docs", "/docs/{page}").unwrap();
        assert_eq!(docs.pattern(), "/docs/{page}");
        assert!(docs.handler().is_none());

        let url = docs
            .url(&PathParams::new().with("page", "intro"), &QueryParams::new())
            .unwrap();
        assert_eq!(url, "/docs/intro");

        assert!(matches!(
            docs.url(&PathParams::new(), &QueryParams::new()),
            Err(RouteError::MissingPathParameter { .. })
        ));
    }

    #[test]
    fn test_descriptor_shares_typed_template() {
        let post = Post::declare().unwrap();
        let descriptor = RouteDescriptor::from_route(&post).with_handler("handler");

        assert!(Arc::ptr_eq(descriptor.template(), post.template()));
        assert_eq!(
            descriptor.summary(),
            RouteSummary {
                name: "Post".into(),
                pattern: "/users/{user_id}/posts/{post_id}".into(),
                parameters: vec!["user_id".into(), "post_id".into()],
                has_handler: true,
            }
        );
    }
}
