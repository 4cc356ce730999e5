//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use callshield_sdk::ShieldEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
///
/// Admin endpoints live under `/api/admin`; `/health` sits at the root.
pub fn create_router(engine: Arc<ShieldEngine>) -> Router {
    let state = AppState { engine };

    let admin = Router::new()
        .route("/stats", get(get_stats))
        .route("/rules", get(list_rules).post(create_rule))
        .route("/rules/:rule_id", delete(delete_rule))
        .route("/blacklist", get(list_blacklist).post(create_blacklist))
        .route("/blacklist/:id", delete(delete_blacklist))
        .route("/test/text_match", post(text_match));

    Router::new()
        .route("/health", get(health))
        .nest("/api/admin", admin)
        .fallback(fallback)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
