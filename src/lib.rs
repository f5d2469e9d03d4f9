//! HTTP service scaffold for a media library.
//!
//! Serves two read-only JSON endpoints behind logging and CORS middleware:
//!
//! ```text
//! GET /api/health  -> {"status":"ok","timestamp":"...","version":"0.0.1"}
//! GET /api/media   -> {"message":"...","endpoints":[...]}
//! anything else    -> 404 {"error":"Not Found"}
//! ```
//!
//! # Modules
//!
//! - [`api`]: Route groups, handlers and the application shell
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup errors and the HTTP error boundary
//! - [`metrics`]: Request metrics and the Prometheus exporter
//! - [`server`]: Listener binding and serving
//! - [`types`]: Shared media data shapes
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServerError};
pub use types::{MediaItem, MediaType};
