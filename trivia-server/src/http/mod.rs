//! HTTP server layer
//!
//! Axum server with:
//! - JSON envelopes for success and every error path
//! - CORS for any origin
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
