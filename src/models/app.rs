//! Application (tenant) descriptor.

use sqlx::FromRow;
use std::fmt;

/// A client application tokens are scoped to. Read-only here; lifecycle is
/// owned by the store.
///
/// `secret` is the app's symmetric signing key. It must never appear in logs
/// or error messages, so `Debug` redacts it.
#[derive(Clone, FromRow)]
pub struct App {
    pub id: i64,
    pub name: String,
    pub secret: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let app = App {
            id: 7,
            name: "web".into(),
            secret: "k3y-material".into(),
        };
        let s = format!("{app:?}");
        assert!(s.contains("web"));
        assert!(!s.contains("k3y-material"));
    }
}
