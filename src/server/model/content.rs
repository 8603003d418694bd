//! Content domain models and parameters.
//!
//! A content item belongs to its creator and links to genres, categories and sponsors
//! with set semantics. Create and update input arrives as a multipart form; the
//! `from_form` constructors validate it before any file is written or row touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::content::ContentDto,
    server::{
        error::{validation::FieldError, AppError},
        model::{auth::Identity, category::Category, genre::Genre, sponsor::Sponsor},
        util::multipart::{MultipartForm, UploadedFile},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: i32,
    pub creator_id: i32,
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub content_file_path: Option<String>,
    pub thumbnail_file_path: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub genres: Vec<Genre>,
    pub categories: Vec<Category>,
    pub sponsors: Vec<Sponsor>,
}

impl Content {
    pub fn into_dto(self) -> ContentDto {
        ContentDto {
            id: self.id,
            creator_id: self.creator_id,
            title: self.title,
            description: self.description,
            visibility: self.visibility,
            content_file_path: self.content_file_path,
            thumbnail_file_path: self.thumbnail_file_path,
            uploaded_at: self.uploaded_at,
            genres: self.genres.into_iter().map(Genre::into_dto).collect(),
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
            sponsors: self.sponsors.into_iter().map(Sponsor::into_dto).collect(),
        }
    }

    /// Converts a content row without its associations.
    pub fn from_entity(entity: entity::content::Model) -> Self {
        Self {
            id: entity.id,
            creator_id: entity.creator_id,
            title: entity.title,
            description: entity.description,
            visibility: entity.visibility,
            content_file_path: entity.content_file_path,
            thumbnail_file_path: entity.thumbnail_file_path,
            uploaded_at: entity.uploaded_at,
            genres: Vec::new(),
            categories: Vec::new(),
            sponsors: Vec::new(),
        }
    }
}

/// Row values for inserting a content item.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub creator_id: i32,
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub content_file_path: Option<String>,
    pub thumbnail_file_path: Option<String>,
}

/// Partial update of a content row; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<bool>,
    pub content_file_path: Option<String>,
    pub thumbnail_file_path: Option<String>,
}

impl ContentChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.visibility.is_none()
            && self.content_file_path.is_none()
            && self.thumbnail_file_path.is_none()
    }
}

/// Association ids requested for a content item, one list per tag kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIds {
    pub genre_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
    pub sponsor_ids: Vec<i32>,
}

impl TagIds {
    fn from_form(form: &MultipartForm, errors: &mut Vec<FieldError>) -> Self {
        Self {
            genre_ids: form.ids("genre_ids", errors).unwrap_or_default(),
            category_ids: form.ids("category_ids", errors).unwrap_or_default(),
            sponsor_ids: form.ids("sponsor_ids", errors).unwrap_or_default(),
        }
    }
}

/// Files uploaded alongside a content form.
#[derive(Debug, Clone, Default)]
pub struct ContentUploads {
    pub content_file: Option<UploadedFile>,
    pub thumbnail_file: Option<UploadedFile>,
}

impl ContentUploads {
    /// Multipart fields that carry files.
    pub const FIELDS: [&'static str; 2] = ["content_file", "thumbnail_file"];

    fn take(form: &mut MultipartForm) -> Self {
        Self {
            content_file: form.take_file("content_file"),
            thumbnail_file: form.take_file("thumbnail_file"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContentParams {
    pub creator_id: i32,
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub tags: TagIds,
    pub uploads: ContentUploads,
}

impl CreateContentParams {
    /// Reads and validates a create form submitted by `identity`.
    ///
    /// `creator_id` defaults to the caller and `visibility` to `true`.
    ///
    /// # Returns
    /// - `Ok(CreateContentParams)` - Validated input
    /// - `Err(AppError::Validation)` - Missing title or description, or a malformed field
    pub fn from_form(identity: &Identity, mut form: MultipartForm) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let title = form.non_blank("title").map(|t| t.trim().to_string());
        if title.is_none() {
            errors.push(FieldError::new("title", "title is required"));
        }

        let description = form.text("description").map(|d| d.trim().to_string());
        if description.is_none() {
            errors.push(FieldError::new("description", "description is required"));
        }

        let creator_id = form.parse::<i32>("creator_id", &mut errors);
        let visibility = form.boolean("visibility", &mut errors);
        let tags = TagIds::from_form(&form, &mut errors);

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => Ok(Self {
                creator_id: creator_id.unwrap_or(identity.user_id),
                title,
                description,
                visibility: visibility.unwrap_or(true),
                tags,
                uploads: ContentUploads::take(&mut form),
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateContentParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<bool>,
    pub tags: TagIds,
    pub uploads: ContentUploads,
}

impl UpdateContentParams {
    /// Reads and validates a partial update form. Omitted fields stay unchanged.
    ///
    /// # Returns
    /// - `Ok(UpdateContentParams)` - Validated input
    /// - `Err(AppError::Validation)` - Blank title or a malformed field
    pub fn from_form(id: i32, mut form: MultipartForm) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let title = form.text("title").map(|t| t.trim().to_string());
        if title.as_deref() == Some("") {
            errors.push(FieldError::new("title", "title may not be empty"));
        }

        let description = form.text("description").map(|d| d.trim().to_string());
        let visibility = form.boolean("visibility", &mut errors);
        let tags = TagIds::from_form(&form, &mut errors);

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            id,
            title,
            description,
            visibility,
            tags,
            uploads: ContentUploads::take(&mut form),
        })
    }
}
