//! Axum HTTP API server.
//!
//! This crate provides:
//! - Prompt generation endpoints (client-scoped and title-scoped)
//! - Video generation job submission and status reconciliation
//! - Request ID propagation and structured request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
