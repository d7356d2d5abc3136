//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, pages, reports};
use crate::state::AppState;

/// Create the main router with API and page routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(api_routes()).merge(page_routes())
}

/// Health check routes (exported separately so probes bypass other layers)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// JSON API routes
///
/// The original system exposed the create handler on both /api/issue and
/// /api/adminGet; that duplication is part of the public contract.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/issue", post(reports::create_report))
        .route(
            "/api/adminGet",
            get(reports::list_reports).post(reports::create_report),
        )
}

/// HTML view routes
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::submit_page))
        .route("/admin", get(pages::admin_page))
}
