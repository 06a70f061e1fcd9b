//! Single sign-on service: credential checks, per-app session tokens,
//! user registration, and admin lookups over HTTP.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::trace::TraceLayer;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login))
        .route("/is-admin/:user_id", get(auth::handlers::is_admin));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/auth", auth_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
