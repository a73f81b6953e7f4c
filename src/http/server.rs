//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Declare the site's routes once and collect them into the registry
//! - Bind the registry's handlers on an Axum Router
//! - Share the handler-less registry with handlers for URL building
//! - Serve until Ctrl+C

use std::sync::Arc;

use axum::routing::{get, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::pages::{self, Home, Pages, Post, RouteIndex, Search, User};
use crate::routing::{BindRegistry, RouteRegistry, RouteResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Every registered route, handlers detached.
    pub registry: Arc<RouteRegistry>,
    pub pages: Arc<Pages>,
}

/// Collect the site's pages and the configured extra routes.
///
/// Configured routes come after the pages; a configured name that clashes
/// with a page fails with `DuplicateRouteName`.
pub fn build_registry(config: &AppConfig) -> RouteResult<RouteRegistry<MethodRouter<AppState>>> {
    let builder = RouteRegistry::builder()
        .route::<Home>(get(pages::home))
        .route::<User>(get(pages::user_profile))
        .route::<Post>(get(pages::user_post))
        .route::<Search>(get(pages::search))
        .route::<RouteIndex>(get(pages::route_index));

    config
        .routes
        .iter()
        .fold(builder, |builder, route| builder.pattern(&route.name, &route.pattern))
        .build()
}

/// HTTP server for the demo site.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> RouteResult<Self> {
        let (registry, bindings) = build_registry(&config)?.split_handlers();
        let pages = Pages::resolve(&registry)?;

        tracing::info!(
            routes = registry.len(),
            handlers = bindings.len(),
            "Routes declared"
        );

        let state = AppState {
            registry: Arc::new(registry),
            pages: Arc::new(pages),
        };

        let router = Router::<AppState>::new()
            .bind_handlers(bindings)
            .with_state(state.clone())
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// The Axum router, for serving or for driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.state.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
