//! PostgreSQL-backed credential store.

use async_trait::async_trait;

use crate::auth::{AppProvider, UserProvider, UserSaver};
use crate::error::StoreError;
use crate::models::{App, User};

use super::DbPool;

/// Store backed by the `users` and `apps` tables. Cloning shares the pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSaver for PgStore {
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError> {
        // the unique index on email turns a duplicate into AlreadyExists
        let row: (i64,) =
            sqlx::query_as("INSERT INTO users (email, pass_hash) VALUES ($1, $2) RETURNING id")
                .bind(email)
                .bind(pass_hash)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.0)
    }
}

#[async_trait]
impl UserProvider for PgStore {
    async fn user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, email, pass_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(user)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StoreError> {
        let row: (bool,) = sqlx::query_as("SELECT is_admin FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[async_trait]
impl AppProvider for PgStore {
    async fn app_by_id(&self, app_id: i64) -> Result<App, StoreError> {
        let app = sqlx::query_as::<_, App>("SELECT id, name, secret FROM apps WHERE id = $1")
            .bind(app_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(app)
    }
}
