//! Session token issue and decode (HS256, keyed per application).

use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{App, User};

/// Claims carried by a session token. This set is a compatibility surface:
/// any service holding the issuing app's secret can verify and read it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub app_id: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Build and sign a token asserting `user`'s identity to `app`.
///
/// The signing key is the app's own secret, so a token issued for one app
/// cannot be replayed against another app holding a different secret.
pub fn issue(user: &User, app: &App, ttl: Duration) -> AppResult<String> {
    let claims = Claims {
        user_id: user.id,
        email: user.email.clone(),
        app_id: app.id,
        exp: (Utc::now() + ttl).timestamp(),
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(app.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow!("sign token: {e}")))
}

/// Decode a token with the issuing app's secret, verifying signature and
/// expiry. The service never consumes tokens itself; this is for whichever
/// downstream verifier trusts them (and for tests).
pub fn decode(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (User, App) {
        let user = User {
            id: 42,
            email: "user@example.com".into(),
            pass_hash: "unused".into(),
        };
        let app = App {
            id: 7,
            name: "web".into(),
            secret: "per-app-secret".into(),
        };
        (user, app)
    }

    #[test]
    fn issue_then_decode_reconstructs_claims() {
        let (user, app) = fixtures();
        let ttl = Duration::hours(1);
        let issued_at = Utc::now().timestamp();

        let token = issue(&user, &app, ttl).unwrap();
        let claims = decode(&token, &app.secret).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.app_id, app.id);
        // exp = issuance + ttl, within clock resolution
        let expected = issued_at + ttl.num_seconds();
        assert!(
            (claims.exp - expected).abs() <= 2,
            "exp {} != {}",
            claims.exp,
            expected
        );
    }

    #[test]
    fn token_is_scoped_to_app_secret() {
        let (user, app) = fixtures();
        let token = issue(&user, &app, Duration::hours(1)).unwrap();
        assert!(decode(&token, "some-other-app-secret").is_err());
    }

    #[test]
    fn expiry_is_strictly_future() {
        let (user, app) = fixtures();
        let token = issue(&user, &app, Duration::minutes(5)).unwrap();
        let claims = decode(&token, &app.secret).unwrap();
        assert!(claims.exp > Utc::now().timestamp());
    }
}
