//! API endpoint handlers

use super::extractors::{JsonExtractor, PathExtractor, QueryExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use callshield_sdk::{
    BlacklistEntry, MatchResult, NewBlacklistEntry, NewRule, Page, Rule, Stats,
};
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unknown routes still answer with the `detail` envelope
pub(super) async fn fallback() -> ServerError {
    ServerError::NotFound("Not Found".to_string())
}

// =======================
// Dashboard
// =======================

pub(super) async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.engine.stats())
}

// =======================
// Rules
// =======================

pub(super) async fn list_rules(
    State(state): State<AppState>,
    QueryExtractor(page): QueryExtractor<Page>,
) -> Json<Vec<Rule>> {
    Json(state.engine.list_rules(page))
}

pub(super) async fn create_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<NewRule>,
) -> Result<Json<Rule>, ServerError> {
    info!("Received rule create request: keyword='{}'", payload.keyword);
    Ok(Json(state.engine.add_rule(payload)?))
}

pub(super) async fn delete_rule(
    State(state): State<AppState>,
    PathExtractor(rule_id): PathExtractor<u64>,
) -> Result<Json<DeletedResponse>, ServerError> {
    state.engine.delete_rule(rule_id)?;
    Ok(Json(DeletedResponse::new()))
}

// =======================
// Blacklist
// =======================

pub(super) async fn list_blacklist(
    State(state): State<AppState>,
    QueryExtractor(page): QueryExtractor<Page>,
) -> Json<Vec<BlacklistEntry>> {
    Json(state.engine.list_blacklist(page))
}

pub(super) async fn create_blacklist(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<NewBlacklistEntry>,
) -> Result<Json<BlacklistEntry>, ServerError> {
    info!("Received blacklist request: number='{}'", payload.number);
    Ok(Json(state.engine.add_blacklist(payload)?))
}

pub(super) async fn delete_blacklist(
    State(state): State<AppState>,
    PathExtractor(id): PathExtractor<u64>,
) -> Result<Json<DeletedResponse>, ServerError> {
    state.engine.delete_blacklist(id)?;
    Ok(Json(DeletedResponse::new()))
}

// =======================
// Test console
// =======================

/// Match free text against the current rules; nothing is persisted
pub(super) async fn text_match(
    State(state): State<AppState>,
    QueryExtractor(query): QueryExtractor<TextMatchQuery>,
) -> Json<MatchResult> {
    Json(state.engine.test_match(&query.text))
}
