use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapping every non-error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope with a message and no payload, used by logout and delete operations.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub error: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Attaches a structured error payload, such as a list of field violations.
    pub fn with_error(message: impl Into<String>, error: impl Serialize) -> Self {
        Self {
            message: message.into(),
            error: serde_json::to_value(error).ok(),
        }
    }
}

/// Query string for name-based search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}
