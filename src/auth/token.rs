//! Session token issuance.
//!
//! Tokens are compact JWTs signed with HS256 using the symmetric key from
//! the auth config. They carry the subject's identity and role and expire
//! a fixed hour after issuance. Nothing in the server decodes them back;
//! holders present them to downstream consumers that share the key.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Fixed session lifetime. Not configurable per call.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user id
    pub sub: String,
    /// Login identifier
    pub username: String,
    /// Role at issuance time
    pub role: String,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Sign a session token for a subject. `now` is passed in rather than read
/// from the clock so expiry is deterministic under test.
pub fn issue(
    secret: &str,
    subject_id: &str,
    username: &str,
    role: &str,
    now: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: subject_id.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        exp: now.timestamp() + TOKEN_TTL_SECS,
    };

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, &claims, &encoding_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn decode_claims(token: &str, secret: &str) -> Claims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .unwrap()
            .claims
    }

    #[test]
    fn expiry_is_exactly_one_hour_after_issuance() {
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let token = issue("secret", "u1", "alice@example.com", "ADMIN", issued).unwrap();

        let claims = decode_claims(&token, "secret");
        assert_eq!(claims.exp, issued.timestamp() + 3600);
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.username, "alice@example.com");
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn token_is_rejected_under_a_different_key() {
        let token = issue("secret", "u1", "alice@example.com", "ADMIN", Utc::now()).unwrap();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &validation,
        );
        assert!(result.is_err());
    }
}
