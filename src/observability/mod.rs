//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry build, handler binding, server lifecycle
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (pretty or JSON)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
