//! Route declaration, rendering and registry behaviour through the public API.

use std::sync::Arc;
use std::thread;

use route_registry::route;
use route_registry::routing::{
    render, PathParams, PathTemplate, QueryParams, Route, RouteDescriptor, RouteError,
    RouteRegistry,
};

route! {
    User("/users/{id}") { id }
    Post("/posts/{id}") { id }
    Comment("/posts/{post_id}/comments/{comment_id}") { post_id, comment_id }
    Search("/search") {}
}

#[test]
fn test_user_route_renders() {
    let user = User::declare().unwrap();
    assert_eq!(user.url("user123"), "/users/user123");

    let template = PathTemplate::parse("/users/{id}").unwrap();
    let path = PathParams::new().with("id", "user123");
    let url = render(&template, &path, &QueryParams::new()).unwrap();
    assert_eq!(url, "/users/user123");
}

#[test]
fn test_search_query_omission() {
    let search = Search::declare().unwrap();

    let query = QueryParams::new().with("q", "go").with("page", "");
    assert_eq!(search.url_with_query(&query), "/search?q=go");

    let query = QueryParams::new().with("a", "").with("b", "x");
    assert_eq!(search.url_with_query(&query), "/search?b=x");

    let query = QueryParams::new().with("a", "").with("b", "");
    assert_eq!(search.url_with_query(&query), "/search");
}

#[test]
fn test_duplicate_placeholder_rejected() {
    assert!(matches!(
        PathTemplate::parse("/x/{id}/{id}"),
        Err(RouteError::MalformedTemplate { .. })
    ));
}

#[test]
fn test_rendered_urls_have_no_braces() {
    let patterns = [
        "/",
        "/users/{id}",
        "/a/{x}/b/{y}/c",
        "/files/{name}.{ext}",
        "{lead}/tail",
    ];

    for pattern in patterns {
        let template = PathTemplate::parse(pattern).unwrap();
        let path: PathParams = template
            .parameter_names()
            .iter()
            .map(|name| (name.clone(), format!("v-{name}")))
            .collect();
        let url = render(&template, &path, &QueryParams::new()).unwrap();

        assert!(!url.contains('{') && !url.contains('}'), "{pattern} -> {url}");
    }
}

#[test]
fn test_registry_names() {
    let err = RouteRegistry::<()>::builder()
        .link::<User>()
        .descriptor(RouteDescriptor::new("User", "/people/{id}").unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteError::DuplicateRouteName("User".into()));

    let registry: RouteRegistry = RouteRegistry::builder()
        .link::<User>()
        .link::<Post>()
        .build()
        .unwrap();

    assert_eq!(registry.get("User").unwrap().pattern(), "/users/{id}");
    assert_eq!(registry.get("Post").unwrap().pattern(), "/posts/{id}");
    assert_eq!(registry.route::<Post>().unwrap().url(9), "/posts/9");
}

#[test]
fn test_dynamic_descriptor_errors() {
    let registry: RouteRegistry = RouteRegistry::builder()
        .pattern("Docs", "/docs/{section}/{page}")
        .build()
        .unwrap();
    let docs = registry.get("Docs").unwrap();

    let url = docs
        .url(
            &PathParams::new().with("section", "guide").with("page", "intro"),
            &QueryParams::new().with("lang", "en"),
        )
        .unwrap();
    assert_eq!(url, "/docs/guide/intro?lang=en");

    assert!(matches!(
        docs.url(&PathParams::new().with("section", "guide"), &QueryParams::new()),
        Err(RouteError::MissingPathParameter { name, .. }) if name == "page"
    ));
    assert!(matches!(
        docs.url(
            &PathParams::new()
                .with("section", "guide")
                .with("page", "intro")
                .with("lang", "en"),
            &QueryParams::new()
        ),
        Err(RouteError::UnknownPathParameter { name, .. }) if name == "lang"
    ));
}

#[test]
fn test_concurrent_builders() {
    let registry: Arc<RouteRegistry> = Arc::new(
        RouteRegistry::builder()
            .link::<Comment>()
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let comment: Comment = registry.route().unwrap();
                (0..100)
                    .map(|j| comment.url(i, j))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let urls = handle.join().unwrap();
        assert_eq!(urls[7], format!("/posts/{i}/comments/7"));
    }
}
