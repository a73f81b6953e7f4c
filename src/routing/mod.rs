//! Route declaration subsystem.
//!
//! # Data Flow
//! ```text
//! Declaration (at startup):
//!     route! { pub User("/users/{id}") { id } }
//!     → template.rs (parse pattern once)
//!     → descriptor.rs (typed builder, optional handler)
//!     → registry.rs (name-keyed, ordered, frozen)
//!
//! URL building (any thread, any time):
//!     user.url("user123")
//!     → render.rs (substitute placeholders, append query)
//!     → "/users/user123"
//!
//! Handler binding (at startup):
//!     registry
//!     → binder.rs ((raw pattern, handler) pairs in registry order)
//!     → axum::Router
//! ```
//!
//! # Design Decisions
//! - Every path literal is written once, in its `route!` declaration
//! - Builders take one named argument per placeholder; no runtime maps
//! - Registry is an immutable value passed explicitly, not global state
//! - No request matching here: the external router owns dispatch

pub mod binder;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod render;
pub mod template;

pub use binder::{BindRegistry, HandlerBinding, OwnedBinding};
pub use descriptor::{Route, RouteDescriptor, RouteSummary};
pub use error::{RouteError, RouteResult};
pub use registry::{RegistryBuilder, RouteRegistry};
pub use render::{render, PathParams, QueryParams};
pub use template::{PathTemplate, Segment};
