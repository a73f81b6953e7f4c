//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use route_registry::config::{AppConfig, RouteConfig};
use route_registry::HttpServer;

/// A demo server with one extra configured route.
pub fn server() -> HttpServer {
    let mut config = AppConfig::default();
    config.routes.push(RouteConfig {
        name: "Docs".into(),
        pattern: "/docs/{page}".into(),
    });
    HttpServer::new(config).unwrap()
}

/// Send a GET request through the router without a socket.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
