//! Login and session re-authentication.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::Identity,
    service::auth::{password::verify_password, token::TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Arguments
    /// - `identifier` - Username or email address
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok((token, identity))` - Signed token and the identity it carries
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown identifier or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, identifier: &str, password: &str) -> Result<(String, Identity), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_identifier(identifier.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.hashed_password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.tokens.issue(&user)?;

        tracing::info!("User {} logged in", user.id);

        Ok(issued)
    }

    /// Re-verifies a token previously stored in the caller's session.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Token still valid
    /// - `Err(AuthError::NoSessionToken)` - Session holds no token
    /// - `Err(AuthError::InvalidToken)` - Stored token expired or no longer verifies
    pub fn reauthenticate(&self, session_token: Option<String>) -> Result<Identity, AuthError> {
        let token = session_token.ok_or(AuthError::NoSessionToken)?;

        self.tokens.verify(&token)
    }
}
