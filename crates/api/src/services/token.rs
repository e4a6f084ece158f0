//! Access token issuance and verification.
//!
//! Tokens are compact HS256-signed JWTs over a single canonical claim set.
//! Registration and login issue the same shape - a freshly registered user
//! simply carries the default `user` role. Tokens are not persisted and
//! cannot be revoked: a token stays valid until `exp` regardless of later
//! password or role changes.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token is malformed, tampered with, or expired.
    #[error("invalid or expired token")]
    Invalid,

    /// Signing failed.
    #[error("failed to sign token")]
    Signing,
}

/// Claim set asserted by an access token.
///
/// Everything a handler needs to identify the user without a store lookup.
/// The claims reflect the account as of issuance time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user ID.
    pub sub: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Account role at issuance time (`user` or `admin`).
    pub role: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// Issues and verifies signed access tokens.
///
/// Built once at startup from configuration and shared via `AppState`.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
    validation: Validation,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret and token lifetime.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_secs: u64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret_bytes),
            decoding: DecodingKey::from_secret(secret_bytes),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
            validation,
        }
    }

    /// Issue a token for a user, expiring `ttl_secs` from now.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        self.issue_at(Utc::now().timestamp(), user)
    }

    fn issue_at(&self, now: i64, user: &User) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.as_str().to_owned(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for tampered, malformed, or expired
    /// tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mangomart_core::{Email, Role, UserId};

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SecretString::from("kX9#mP2$vQ7!nR4@wT8%yU3^zA6&bC1*"), 3600)
    }

    fn sample_user() -> User {
        User {
            id: UserId::new(42),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: Email::parse("grace@example.com").unwrap(),
            role: Role::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(&sample_user()).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "grace@example.com");
        assert_eq!(claims.first_name, "Grace");
        assert_eq!(claims.last_name, "Hopper");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issuer().issue(&sample_user()).unwrap();

        let other = TokenIssuer::new(&SecretString::from("qW5$eR8#tY2@uI6!oP9%aS3^dF7&gH1*"), 3600);
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let issuer = issuer();
        let token = issuer.issue(&sample_user()).unwrap();

        // Rewrite the payload segment (base64 JSON always starts "eyJ")
        let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
        parts[1].replace_range(0..3, "eyK");
        let tampered = parts.join(".");

        assert!(matches!(issuer.verify(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = issuer();
        // Issued two hours in the past with a one hour lifetime
        let past = Utc::now().timestamp() - 7200;
        let token = issuer.issue_at(past, &sample_user()).unwrap();

        assert!(matches!(issuer.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(
            issuer().verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }
}
