//! Demo site built on the route registry.
//!
//! # Data Flow
//! ```text
//! pages.rs (route! declarations, handlers)
//!     → server.rs build_registry (pages + configured routes)
//!     → split_handlers: bindings → axum::Router, registry → AppState
//!     → handlers render links through typed builders
//! ```

pub mod pages;
pub mod server;

pub use server::{build_registry, AppState, HttpServer};
