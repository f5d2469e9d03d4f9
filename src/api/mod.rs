//! HTTP API module: health and media route groups plus the application shell.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::{app, create_router};
