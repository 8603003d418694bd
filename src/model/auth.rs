use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub user_id: i32,
    pub username: String,
    pub name: String,
    pub is_admin: bool,
    /// Issue time in milliseconds since the Unix epoch.
    pub issued_at: i64,
    /// Token lifetime in milliseconds.
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub identity: IdentityDto,
}
