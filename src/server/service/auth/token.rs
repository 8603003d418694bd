//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the shared secret from configuration. Expiry is
//! enforced by `jsonwebtoken` during decoding with zero leeway; verification is a pure
//! function of the token, the secret and the clock.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        auth::{Identity, TokenClaims},
        user::User,
    },
};

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs a token for `user` valid for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok((token, identity))` - Encoded token and the identity it carries
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<(String, Identity), AppError> {
        let now = Utc::now();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let ttl_millis = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);

        let claims = TokenClaims {
            user_id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
            issued_at: now.timestamp_millis(),
            expires_in: ttl_millis,
            iat: now.timestamp(),
            exp: now.timestamp().saturating_add(ttl_secs),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))?;

        Ok((token, Identity::from_claims(claims)))
    }

    /// Validates signature, format and expiry of `token`.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Any validation failure
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| Identity::from_claims(data.claims))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
