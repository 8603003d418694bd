use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{category::CategoryDto, genre::GenreDto, sponsor::SponsorDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i32,
    pub creator_id: i32,
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub content_file_path: Option<String>,
    pub thumbnail_file_path: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub genres: Vec<GenreDto>,
    pub categories: Vec<CategoryDto>,
    pub sponsors: Vec<SponsorDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleQuery {
    #[serde(default)]
    pub title: String,
}
