use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Identity,
    service::auth::token::TokenService,
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be the given user or an admin.
    SelfOrAdmin(i32),
}

/// Resolves the caller's identity from the `Authorization: Bearer` header.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Verifies the bearer token and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Token valid and all permissions satisfied
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token on the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token failed verification
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission was not satisfied
    pub fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;

        let identity = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !identity.is_admin {
                        return Err(AuthError::AccessDenied(
                            identity.user_id,
                            "Admin permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(user_id) => {
                    if !identity.owns_or_admin(*user_id) {
                        return Err(AuthError::AccessDenied(
                            identity.user_id,
                            format!("Attempted to act on user {} without admin permission", user_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(identity)
    }

    fn bearer_token(&self) -> Option<&str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;

        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}
