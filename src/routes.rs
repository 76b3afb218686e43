//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (database probe)
//! - `/api/*`      - Shape CRUD endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging via `tower-http`

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
