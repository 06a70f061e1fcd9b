//! Error taxonomy: domain kinds that callers branch on, plus the store-level
//! kind set the credential store surfaces.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the credential store.
///
/// Only `NotFound` and `AlreadyExists` are meaningful to the service; any
/// `Backend` failure is collapsed to [`AppError::Internal`] at the boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    AlreadyExists,

    #[error(transparent)]
    Backend(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::AlreadyExists
            }
            _ => StoreError::Backend(err),
        }
    }
}

/// Application-level errors. Each variant is a distinct outward-facing kind;
/// transports map on the variant, never on the message text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong email/password pair. Also covers "no such user" so callers
    /// cannot probe which accounts exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("app not found")]
    AppNotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Hashing, signing, or unclassified store failure. The chain is logged
    /// server-side; callers get a fixed message.
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid credentials"),
            AppError::UserExists => (StatusCode::CONFLICT, "user already exists"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user not found"),
            AppError::AppNotFound => (StatusCode::NOT_FOUND, "app not found"),
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn status_codes_per_kind() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::UserExists.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::UserNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AppNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidArgument("user_id must be positive".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_body_is_fixed() {
        let res = AppError::Internal(anyhow::anyhow!("pool exhausted: connect timeout"))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
