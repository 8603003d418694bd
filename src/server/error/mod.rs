//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors and
//! implements `IntoResponse`, producing the `{message, error}` envelope with the status
//! code assigned to each failure kind. Repository and service errors bubble up unmodified
//! and are only mapped here, at the HTTP boundary.

pub mod auth;
pub mod config;
pub mod content;
pub mod validation;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        cache::CacheError,
        error::{
            auth::AuthError, config::ConfigError, content::ContentError,
            validation::FieldError,
        },
        subscription::SubscriptionError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` handles its own
/// response mapping; infrastructure failures all collapse into a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Content domain error, such as an association request with no valid ids.
    #[error(transparent)]
    ContentErr(#[from] ContentError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cache backend failure.
    #[error(transparent)]
    CacheErr(#[from] CacheError),

    /// Subscription service failure.
    #[error(transparent)]
    SubscriptionErr(#[from] SubscriptionError),

    /// File store or socket I/O failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed schema validation.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic message.
    #[error("{0}")]
    InternalError(String),
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Failed to (de)serialize JSON: {}", err))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_error("Validation failed", fields)),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
