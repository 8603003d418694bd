use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub pp_url: Option<String>,
}

/// Projection of a user that is safe to expose to other users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicUserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub pp_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsernameQuery {
    pub username: Option<String>,
}
