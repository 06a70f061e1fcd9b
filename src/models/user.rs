//! User identity record.

use sqlx::FromRow;
use std::fmt;

/// A registered user. Created once by registration, immutable afterwards.
///
/// `pass_hash` is an argon2 PHC string. It never leaves the service and is
/// excluded from `Debug` output.
#[derive(Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub pass_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("pass_hash", &"<redacted>")
            .finish()
    }
}
