//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Availability ledger
        .route("/availability", post(handlers::add_availability))
        .route("/availability", get(handlers::list_availability))
        // Session lifecycle
        .route("/sessions", post(handlers::request_session))
        .route(
            "/sessions/{session_id}/reschedule",
            post(handlers::reschedule_session),
        )
        .route(
            "/sessions/{session_id}/cancel",
            post(handlers::cancel_session),
        )
        .route("/sessions/{session_id}/room", post(handlers::assign_room))
        // Trainer schedule view
        .route(
            "/trainers/{trainer_id}/schedule",
            get(handlers::trainer_schedule),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
