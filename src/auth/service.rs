//! Auth domain service: orchestrates the credential store, password hashing,
//! and token issuance behind login, registration, and admin lookup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::{info, warn};

use crate::auth::{jwt, PasswordHasher};
use crate::error::{AppError, AppResult, StoreError};
use crate::models::{App, User};

/// Persists new user records.
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Returns the id assigned by the store. Fails with
    /// [`StoreError::AlreadyExists`] on a duplicate email.
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError>;
}

/// Reads user records and the admin flag.
#[async_trait]
pub trait UserProvider: Send + Sync {
    async fn user_by_email(&self, email: &str) -> Result<User, StoreError>;
    async fn is_admin(&self, user_id: i64) -> Result<bool, StoreError>;
}

/// Reads application descriptors.
#[async_trait]
pub trait AppProvider: Send + Sync {
    async fn app_by_id(&self, app_id: i64) -> Result<App, StoreError>;
}

/// Stateless orchestration of the three use cases. One instance serves any
/// number of concurrent callers; the store is the only shared mutable
/// resource.
#[derive(Clone)]
pub struct AuthService {
    user_saver: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    app_provider: Arc<dyn AppProvider>,
    hasher: PasswordHasher,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        hasher: PasswordHasher,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            hasher,
            token_ttl,
        }
    }

    /// Check the credentials and mint a session token scoped to `app_id`.
    ///
    /// "No such user" and "wrong password" both come back as
    /// [`AppError::InvalidCredentials`] so callers cannot probe which
    /// accounts exist. An unknown `app_id` is reported distinctly: app ids
    /// are caller configuration, not user-entered credentials.
    pub async fn login(&self, email: &str, password: &str, app_id: i64) -> AppResult<String> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidArgument(
                "email and password must be non-empty".into(),
            ));
        }

        info!(email, "attempting to log user in");

        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                warn!(email, "login for unknown user");
                return Err(AppError::InvalidCredentials);
            }
            Err(err) => return Err(internal("login: fetch user", err)),
        };

        if !self.hasher.verify(password, &user.pass_hash)? {
            info!(email, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let app = match self.app_provider.app_by_id(app_id).await {
            Ok(app) => app,
            Err(StoreError::NotFound) => return Err(AppError::AppNotFound),
            Err(err) => return Err(internal("login: fetch app", err)),
        };

        let token = jwt::issue(&user, &app, self.token_ttl)?;

        info!(email, user_id = user.id, app_id, "user logged in");
        Ok(token)
    }

    /// Hash the password and persist a new user, returning the assigned id.
    ///
    /// The store's uniqueness constraint is the only guard against duplicate
    /// registration races: of two concurrent attempts, exactly one wins.
    pub async fn register_new_user(&self, email: &str, password: &str) -> AppResult<i64> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidArgument(
                "email and password must be non-empty".into(),
            ));
        }

        info!(email, "registering user");

        let pass_hash = self.hasher.hash(password)?;

        let user_id = match self.user_saver.save_user(email, &pass_hash).await {
            Ok(id) => id,
            Err(StoreError::AlreadyExists) => {
                warn!(email, "duplicate registration");
                return Err(AppError::UserExists);
            }
            Err(err) => return Err(internal("register: save user", err)),
        };

        info!(email, user_id, "user registered");
        Ok(user_id)
    }

    /// Report whether the user is privileged, straight from the store.
    /// Never cached: every call reflects current store state.
    pub async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        if user_id <= 0 {
            return Err(AppError::InvalidArgument("user_id must be positive".into()));
        }

        let is_admin = match self.user_provider.is_admin(user_id).await {
            Ok(flag) => flag,
            Err(StoreError::NotFound) => return Err(AppError::UserNotFound),
            Err(err) => return Err(internal("is_admin: fetch flag", err)),
        };

        info!(user_id, is_admin, "checked admin flag");
        Ok(is_admin)
    }
}

/// Wrap an unclassified store error with its operation tag. Callers only see
/// the `Internal` kind; the tagged chain goes to the log.
fn internal(op: &'static str, err: StoreError) -> AppError {
    AppError::Internal(anyhow::Error::new(err).context(op))
}
