//! Demo site pages.
//!
//! Every path below is written once, in the `route!` block. Handlers are
//! bound to those patterns through the registry, and every link the pages
//! emit comes from a typed builder.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use maud::{html, Markup, DOCTYPE};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::routing::{QueryParams, Route, RouteRegistry, RouteResult, RouteSummary};

crate::route! {
    /// Landing page.
    pub Home("/") {}

    /// A user's profile.
    pub User("/users/{id}") { id }

    /// One post of a user.
    pub Post("/users/{user_id}/posts/{post_id}") { user_id, post_id }

    /// Search results; takes `q` and `page` as query parameters.
    pub Search("/search") {}

    /// JSON listing of every registered route.
    pub RouteIndex("/routes") {}
}

/// The typed routes the pages link to.
#[derive(Debug, Clone)]
pub struct Pages {
    pub home: Home,
    pub user: User,
    pub post: Post,
    pub search: Search,
    pub route_index: RouteIndex,
}

impl Pages {
    /// Look every page route up in a built registry.
    pub fn resolve(registry: &RouteRegistry) -> RouteResult<Self> {
        Ok(Self {
            home: registry.route()?,
            user: registry.route()?,
            post: registry.route()?,
            search: registry.route()?,
            route_index: registry.route()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
}

fn layout(pages: &Pages, title: &str, body: Markup) -> Html<String> {
    let markup = html! {
        (DOCTYPE)
        html {
            head { title { (title) } }
            body {
                nav {
                    a href=(pages.home.url()) { "Home" }
                    " | "
                    a href=(pages.route_index.url()) { "Routes" }
                }
                h1 { (title) }
                (body)
            }
        }
    };
    Html(markup.into_string())
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let pages = &state.pages;
    let others: Vec<RouteSummary> = state
        .registry
        .iter()
        .filter(|descriptor| !is_page(descriptor.name()))
        .map(|descriptor| descriptor.summary())
        .collect();

    layout(
        pages,
        "Home",
        html! {
            ul {
                li { a href=(pages.user.url("alice")) { "Alice" } }
                li { a href=(pages.post.url("alice", 1)) { "Alice's first post" } }
                li {
                    a href=(pages.search.url_with_query(&QueryParams::new().with("q", "rust"))) {
                        "Search for rust"
                    }
                }
            }
            @if !others.is_empty() {
                h2 { "Other routes" }
                ul {
                    @for summary in &others {
                        li { (summary.name) ": " code { (summary.pattern) } }
                    }
                }
            }
        },
    )
}

pub async fn user_profile(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let pages = &state.pages;
    layout(
        pages,
        &format!("User {id}"),
        html! {
            ul {
                @for post_id in 1..=3 {
                    li { a href=(pages.post.url(&id, post_id)) { "Post " (post_id) } }
                }
            }
        },
    )
}

pub async fn user_post(
    State(state): State<AppState>,
    Path((user_id, post_id)): Path<(String, u64)>,
) -> Html<String> {
    let pages = &state.pages;
    layout(
        pages,
        &format!("Post {post_id} by {user_id}"),
        html! {
            p { a href=(pages.user.url(&user_id)) { "Back to " (user_id) } }
            @if post_id > 1 {
                p { a href=(pages.post.url(&user_id, post_id - 1)) { "Previous post" } }
            }
            p { a href=(pages.post.url(&user_id, post_id + 1)) { "Next post" } }
        },
    )
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let pages = &state.pages;
    let page = params.page.unwrap_or(1);
    let next = QueryParams::new()
        .with("q", params.q.as_str())
        .with("page", (page + 1).to_string());

    layout(
        pages,
        "Search",
        html! {
            p { "Results for \"" (params.q) "\", page " (page) }
            @if !params.q.is_empty() {
                a href=(pages.search.url_with_query(&next)) { "Next page" }
            }
        },
    )
}

pub async fn route_index(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    Json(state.registry.summaries())
}

fn is_page(name: &str) -> bool {
    [Home::NAME, User::NAME, Post::NAME, Search::NAME, RouteIndex::NAME].contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_builders() {
        let registry: RouteRegistry = RouteRegistry::builder()
            .link::<Home>()
            .link::<User>()
            .link::<Post>()
            .link::<Search>()
            .link::<RouteIndex>()
            .build()
            .unwrap();
        let pages = Pages::resolve(&registry).unwrap();

        assert_eq!(pages.home.url(), "/");
        assert_eq!(pages.user.url("user123"), "/users/user123");
        assert_eq!(pages.post.url("alice", 2), "/users/alice/posts/2");
        assert_eq!(
            pages
                .search
                .url_with_query(&QueryParams::new().with("q", "go").with("page", "")),
            "/search?q=go"
        );
    }

    #[test]
    fn test_resolve_requires_every_page() {
        let registry: RouteRegistry = RouteRegistry::builder()
            .link::<Home>()
            .link::<User>()
            .build()
            .unwrap();
        assert!(Pages::resolve(&registry).is_err());
    }

    #[test]
    fn test_is_page() {
        assert!(is_page("Search"));
        assert!(!is_page("Docs"));
    }
}
