//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::health;
use crate::handlers::prompts::{generate_client_prompt, generate_title_prompt};
use crate::handlers::video::{generate_video, video_status};
use crate::middleware::{request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let prompt_routes = Router::new()
        // Client-scoped generation (template fallback on upstream failure)
        .route("/prompts/generate", post(generate_client_prompt))
        // Title-scoped generation (no fallback)
        .route("/prompt/generate", post(generate_title_prompt));

    let video_routes = Router::new()
        .route("/video/generate", post(generate_video))
        .route("/video/status/:remote_job_id", get(video_status));

    let api_routes = Router::new().merge(prompt_routes).merge(video_routes);

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .with_state(state)
}
