//! Caller identity and the token claims it is carried in.

use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{IdentityDto, LoginDto, RegisterDto},
    server::{
        error::validation::{FieldError, Validate, Violations},
        model::user::{validate_email, validate_password},
    },
};

/// Authenticated caller of one request.
///
/// Produced by the token verifier and passed explicitly to services and authorizers;
/// never stored beyond the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
    pub name: String,
    pub is_admin: bool,
    /// Issue time in milliseconds since the Unix epoch.
    pub issued_at: i64,
    /// Token lifetime in milliseconds.
    pub expires_in: i64,
}

impl Identity {
    pub fn into_dto(self) -> IdentityDto {
        IdentityDto {
            user_id: self.user_id,
            username: self.username,
            name: self.name,
            is_admin: self.is_admin,
            issued_at: self.issued_at,
            expires_in: self.expires_in,
        }
    }

    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            name: claims.name,
            is_admin: claims.is_admin,
            issued_at: claims.issued_at,
            expires_in: claims.expires_in,
        }
    }

    /// Whether the caller may act on resources owned by `owner_id`.
    pub fn owns_or_admin(&self, owner_id: i32) -> bool {
        self.user_id == owner_id || self.is_admin
    }
}

/// JWT payload. `iat` and `exp` are seconds; `issuedAt` and `expiresIn` are milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub user_id: i32,
    pub username: String,
    pub name: String,
    pub is_admin: bool,
    pub issued_at: i64,
    pub expires_in: i64,
    pub iat: i64,
    pub exp: i64,
}

impl Validate for LoginDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("identifier", &self.identifier);
        violations.require_non_empty("password", &self.password);
        violations.into_result()
    }
}

impl Validate for RegisterDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("username", &self.username);
        violations.require_non_empty("name", &self.name);
        validate_email(&mut violations, &self.email);
        validate_password(&mut violations, &self.password);
        violations.into_result()
    }
}
