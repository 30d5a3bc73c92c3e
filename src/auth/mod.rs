//! Session handling: credential verification, token issuance, logout.

pub mod password;
pub mod token;

use anyhow::Result;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{DbPool, LoginResponse, LogoutResponse, User, UserRole};

#[derive(Debug, Error)]
pub enum AuthError {
    /// Covers both unknown user and wrong password. A single failure mode
    /// keeps the login endpoint from being used to enumerate accounts.
    #[error("Incorrect username or password")]
    InvalidCredentials,
    #[error("A database error occurred")]
    Store(#[from] sqlx::Error),
    #[error("Failed to sign session token")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Authenticate a user and issue a session token.
pub async fn authenticate(
    db: &DbPool,
    token_secret: &str,
    username: &str,
    password: &str,
) -> Result<LoginResponse, AuthError> {
    let user = User::find_by_email(db, username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !password::verify_password(password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let session_token = token::issue(token_secret, &user.id, &user.email, &user.role, Utc::now())?;

    Ok(LoginResponse {
        token: session_token,
        user: user.into(),
    })
}

/// Acknowledge a logout. Sessions are stateless: the token is not decoded,
/// checked, or revoked, so the acknowledgment is advisory only.
pub fn acknowledge_logout(_token: &str) -> LogoutResponse {
    LogoutResponse {
        message: "User successfully logged out.".to_string(),
    }
}

/// Create the configured admin account if it does not exist yet. Runs at
/// startup; a no-op when the account is present or no password is set.
pub async fn ensure_admin_user(
    db: &DbPool,
    admin_email: &str,
    admin_password: Option<&str>,
) -> Result<()> {
    if User::find_by_email(db, admin_email).await?.is_some() {
        return Ok(());
    }

    let Some(admin_password) = admin_password else {
        warn!("No admin account exists and no admin password is configured; skipping seed");
        return Ok(());
    };

    let password_hash = password::hash_password(admin_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {}", e))?;
    User::create(db, admin_email, &password_hash, UserRole::Admin).await?;
    info!("Created admin user: {}", admin_email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    const SECRET: &str = "test-secret";

    async fn seed_alice(db: &DbPool) {
        let hash = password::hash_password("correct-pw").unwrap();
        User::create(db, "alice@example.com", &hash, UserRole::Admin)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn login_returns_token_and_user_projection() {
        let db = test_pool().await;
        seed_alice(&db).await;

        let before = Utc::now().timestamp();
        let response = authenticate(&db, SECRET, "alice@example.com", "correct-pw")
            .await
            .unwrap();
        let after = Utc::now().timestamp();

        assert_eq!(response.user.username, "alice@example.com");
        assert_eq!(response.user.role, "ADMIN");

        let claims = decode::<token::Claims>(
            &response.token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap()
        .claims;
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.username, "alice@example.com");
        assert!(claims.exp >= before + token::TOKEN_TTL_SECS);
        assert!(claims.exp <= after + token::TOKEN_TTL_SECS);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_identically() {
        let db = test_pool().await;
        seed_alice(&db).await;

        let wrong_pw = authenticate(&db, SECRET, "alice@example.com", "wrong-pw")
            .await
            .unwrap_err();
        let unknown = authenticate(&db, SECRET, "nobody@example.com", "correct-pw")
            .await
            .unwrap_err();

        assert_eq!(wrong_pw.to_string(), "Incorrect username or password");
        assert_eq!(unknown.to_string(), wrong_pw.to_string());
    }

    #[test]
    fn logout_acknowledges_any_token() {
        for token in ["garbage", "expired.jwt.here", "x"] {
            let response = acknowledge_logout(token);
            assert_eq!(response.message, "User successfully logged out.");
        }
    }

    #[tokio::test]
    async fn ensure_admin_user_is_idempotent() {
        let db = test_pool().await;

        ensure_admin_user(&db, "admin@kiosk.local", Some("bootstrap-pw"))
            .await
            .unwrap();
        ensure_admin_user(&db, "admin@kiosk.local", Some("different-pw"))
            .await
            .unwrap();

        let admin = User::find_by_email(&db, "admin@kiosk.local")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, "ADMIN");
        // First password wins; the second call did not overwrite
        assert!(password::verify_password("bootstrap-pw", &admin.password_hash));
    }

    #[tokio::test]
    async fn ensure_admin_user_without_password_seeds_nothing() {
        let db = test_pool().await;
        ensure_admin_user(&db, "admin@kiosk.local", None).await.unwrap();
        let admin = User::find_by_email(&db, "admin@kiosk.local").await.unwrap();
        assert!(admin.is_none());
    }
}
