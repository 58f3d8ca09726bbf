use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Assistant flow
        .route("/", get(handlers::show_assistant))
        .route("/assistant/start", post(handlers::start_assistant))
        .route("/assistant/stop", post(handlers::stop_assistant))
        .route("/assistant/status", get(handlers::assistant_status))
        // Interview flow
        .route("/interview", get(handlers::show_interview))
        .route("/interview/start", post(handlers::start_interview))
        .route("/interview/stop", post(handlers::stop_interview))
        .route("/interview/status", get(handlers::interview_status))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
