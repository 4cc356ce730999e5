//! REST API type definitions

use callshield_sdk::ShieldEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
///
/// The engine serializes its own writers and serves reads from immutable
/// snapshots, so handlers share it without an outer lock.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ShieldEngine>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters of `POST /admin/test/text_match`
#[derive(Debug, Deserialize)]
pub struct TextMatchQuery {
    pub text: String,
}

/// Body returned by successful deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub msg: String,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            msg: "Deleted".to_string(),
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
