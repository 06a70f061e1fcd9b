//! Auth HTTP handlers: register, login, admin lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::handlers::http::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(range(min = 1))]
    pub app_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    let user_id = state
        .auth()
        .register_new_user(&body.email, &body.password)
        .await?;

    Ok(Json(RegisterResponse { user_id }))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    let token = state
        .auth()
        .login(&body.email, &body.password, body.app_id)
        .await?;

    Ok(Json(LoginResponse { token }))
}

/// GET /auth/is-admin/:user_id
pub async fn is_admin(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<IsAdminResponse>, AppError> {
    let is_admin = state.auth().is_admin(user_id).await?;
    Ok(Json(IsAdminResponse { is_admin }))
}
