//! HTTP plumbing: shared state and the health probe.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::AuthService;

/// Shared application state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "sso" })),
    )
}
