//! Route registry: declare each endpoint's path once, get a typed URL builder
//! and a handler binding from that single declaration.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use routing::{Route, RouteError, RouteRegistry};
