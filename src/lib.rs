//! Minimal HTTP service used as a scan target in SCA labs.
//!
//! The service answers two fixed routes and nothing else:
//!
//! ```text
//! GET /        200 text/plain        Vulnerable Node.js App - SCA Testing Lab
//! GET /health  200 application/json  {"status":"running","message":"..."}
//! ```
//!
//! Every other path gets axum's default 404.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Route handlers and router
//! - [`server`]: Bind, startup announcement, graceful serve
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
