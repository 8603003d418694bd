//! Content factory for creating test content entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test content owned by a given creator.
///
/// # Example
///
/// ```rust,ignore
/// let content = ContentFactory::new(&db, creator.id)
///     .title("Pilot")
///     .content_file_path("uploads/pilot.mp4")
///     .build()
///     .await?;
/// ```
pub struct ContentFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    title: String,
    description: String,
    visibility: bool,
    content_file_path: Option<String>,
    thumbnail_file_path: Option<String>,
}

impl<'a> ContentFactory<'a> {
    /// Creates a new ContentFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Content {id}"`
    /// - description: `"Description {id}"`
    /// - visibility: `true`
    /// - no stored files
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            title: format!("Content {}", id),
            description: format!("Description {}", id),
            visibility: true,
            content_file_path: None,
            thumbnail_file_path: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn visibility(mut self, visibility: bool) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn content_file_path(mut self, path: impl Into<String>) -> Self {
        self.content_file_path = Some(path.into());
        self
    }

    pub fn thumbnail_file_path(mut self, path: impl Into<String>) -> Self {
        self.thumbnail_file_path = Some(path.into());
        self
    }

    /// Builds and inserts the content entity into the database.
    pub async fn build(self) -> Result<entity::content::Model, DbErr> {
        entity::content::ActiveModel {
            creator_id: ActiveValue::Set(self.creator_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            visibility: ActiveValue::Set(self.visibility),
            content_file_path: ActiveValue::Set(self.content_file_path),
            thumbnail_file_path: ActiveValue::Set(self.thumbnail_file_path),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates content with default values for the given creator.
pub async fn create_content(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::content::Model, DbErr> {
    ContentFactory::new(db, creator_id).build().await
}
