use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry validation.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// Caller is authenticated but lacks the rights for the operation.
    ///
    /// Carries the caller's user id and a description for server-side logs.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Caller is neither owner, admin, nor subscribed to the content's creator.
    #[error("User {0} is not subscribed to creator {1}")]
    SubscriptionRequired(i32, i32),

    /// Login identifier unknown or password mismatch.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Session re-authentication requested but the session holds no token.
    #[error("Session holds no token")]
    NoSessionToken,
}

/// Converts authentication errors into HTTP responses.
///
/// The legacy API uses 401 both for missing credentials and for insufficient rights,
/// and 404 for failed logins; both are kept for client compatibility.
///
/// # Returns
/// - 401 Unauthorized - `MissingToken`, `InvalidToken`, `AccessDenied`, `SubscriptionRequired`
/// - 404 Not Found - `InvalidCredentials`, `NoSessionToken`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::AccessDenied(_, _) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::SubscriptionRequired(_, _) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized - Subscription required",
            ),
            Self::InvalidCredentials => (StatusCode::NOT_FOUND, "Authentication failed"),
            Self::NoSessionToken => (StatusCode::NOT_FOUND, "No token"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
