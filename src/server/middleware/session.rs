//! Type-safe session wrapper for the login token.
//!
//! The session cookie is httpOnly, so the token stored here lets a browser re-authenticate
//! after a reload without the client ever handling it.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_TOKEN: &str = "auth:token";

/// Authentication session management.
///
/// Stores the bearer token issued at login for later re-authentication.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Starts a fresh authenticated session holding `token`.
    ///
    /// Previous session data is dropped and the session id is rotated, so an id issued
    /// before login never carries the authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored under a new session id
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn begin(&self, token: String) -> Result<(), AppError> {
        self.clear().await;
        self.set_token(token).await?;
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Stores the token issued at login.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the stored token, if any.
    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_TOKEN).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
