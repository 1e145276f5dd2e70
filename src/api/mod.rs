//! HTTP API module for the greeting and health endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{HealthResponse, ROOT_GREETING};
pub use routes::create_router;
