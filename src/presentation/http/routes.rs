//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    middleware,
    response::IntoResponse,
    routing::{any, get, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, track_metrics};
use crate::shared::error::AppError;
use crate::shared::messages::Message;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics,
    ))
}

/// Known path, unmapped method.
async fn method_not_allowed(State(state): State<AppState>) -> AppError {
    AppError::MethodNotAllowed(Message::UnsupportedOperation.text(state.locale()).into())
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/invites", invite_routes(state))
}

/// Invite routes (protected)
fn invite_routes(state: AppState) -> Router<AppState> {
    use handlers::invite;

    Router::new()
        .route("/", get(invite::list_invites).post(invite::create_invite))
        .route("/create", any(invite::create_form))
        .route(
            "/{id}",
            get(invite::get_invite)
                .put(invite::update_invite)
                .patch(invite::update_invite)
                .delete(invite::delete_invite),
        )
        .route("/{id}/edit", get(invite::edit_form))
        .route("/{id}/presence", put(invite::update_presence))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
