//! Content data repository for database operations.
//!
//! This module provides the `ContentRepository` for content rows and their genre,
//! category and sponsor associations. Reads that return full content items load the
//! associations with one query per tag kind rather than one per item.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect,
};

use super::contains_pattern;
use crate::server::{
    error::{content::ContentError, AppError},
    model::{
        category::Category,
        content::{Content, ContentChanges, NewContent},
        genre::Genre,
        sponsor::Sponsor,
    },
};

/// Repository providing database operations for content management.
pub struct ContentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContentRepository<'a, C> {
    /// Creates a new ContentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ContentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a content row stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Row values for the new content item
    ///
    /// # Returns
    /// - `Ok(Content)` - The created content, without associations
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: NewContent) -> Result<Content, AppError> {
        let entity = entity::prelude::Content::insert(entity::content::ActiveModel {
            creator_id: ActiveValue::Set(param.creator_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            visibility: ActiveValue::Set(param.visibility),
            content_file_path: ActiveValue::Set(param.content_file_path),
            thumbnail_file_path: ActiveValue::Set(param.thumbnail_file_path),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Content::from_entity(entity))
    }

    /// Finds a content item by ID, including its associations.
    ///
    /// # Returns
    /// - `Ok(Some(Content))` - Content found
    /// - `Ok(None)` - No content with that ID
    /// - `Err(AppError)` - Database error or unreadable sponsor row
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Content>, AppError> {
        let Some(entity) = entity::prelude::Content::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_tags(vec![entity]).await?.pop())
    }

    /// Finds content whose title contains `title`.
    ///
    /// Matching follows SQLite `LIKE`, so it is case-insensitive for ASCII.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Content>, AppError> {
        let entities = entity::prelude::Content::find()
            .filter(entity::content::Column::Title.like(contains_pattern(title)))
            .order_by_asc(entity::content::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Finds all content created by `creator_id`, newest first.
    pub async fn find_by_creator_id(&self, creator_id: i32) -> Result<Vec<Content>, AppError> {
        let entities = entity::prelude::Content::find()
            .filter(entity::content::Column::CreatorId.eq(creator_id))
            .order_by_desc(entity::content::Column::UploadedAt)
            .order_by_desc(entity::content::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Returns every content item with its associations, ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Content>, AppError> {
        let entities = entity::prelude::Content::find()
            .order_by_asc(entity::content::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Applies a partial update to a content row.
    ///
    /// # Arguments
    /// - `id` - ID of the content to update
    /// - `changes` - Columns to overwrite; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(true)` - Row exists (and was updated if `changes` was non-empty)
    /// - `Ok(false)` - No content with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, changes: ContentChanges) -> Result<bool, AppError> {
        if changes.is_empty() {
            let exists = entity::prelude::Content::find_by_id(id)
                .one(self.db)
                .await?
                .is_some();
            return Ok(exists);
        }

        let mut active = entity::content::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(visibility) = changes.visibility {
            active.visibility = ActiveValue::Set(visibility);
        }
        if let Some(path) = changes.content_file_path {
            active.content_file_path = ActiveValue::Set(Some(path));
        }
        if let Some(path) = changes.thumbnail_file_path {
            active.thumbnail_file_path = ActiveValue::Set(Some(path));
        }

        let result = entity::prelude::Content::update_many()
            .set(active)
            .filter(entity::content::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a content row and its association rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Content deleted
    /// - `Ok(false)` - No content with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::ContentGenre::delete_many()
            .filter(entity::content_genre::Column::ContentId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::ContentCategory::delete_many()
            .filter(entity::content_category::Column::ContentId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::ContentSponsor::delete_many()
            .filter(entity::content_sponsor::Column::ContentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Content::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Links genres to a content item with set semantics.
    ///
    /// Duplicate ids and links that already exist are ignored. Ids with no genre row are
    /// skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids that reference existing genres (empty for empty input)
    /// - `Err(AppError::ContentErr(NoValidAssociations))` - No requested id exists
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn associate_genres(&self, content_id: i32, ids: &[i32]) -> Result<Vec<i32>, AppError> {
        self.associate::<entity::genre::Entity, entity::content_genre::Entity, _>(
            "genre",
            content_id,
            ids,
            entity::genre::Column::Id,
            [
                entity::content_genre::Column::ContentId,
                entity::content_genre::Column::GenreId,
            ],
            |genre_id| entity::content_genre::ActiveModel {
                content_id: ActiveValue::Set(content_id),
                genre_id: ActiveValue::Set(genre_id),
            },
        )
        .await
    }

    /// Links categories to a content item with set semantics.
    ///
    /// Behaves like [`ContentRepository::associate_genres`].
    pub async fn associate_categories(
        &self,
        content_id: i32,
        ids: &[i32],
    ) -> Result<Vec<i32>, AppError> {
        self.associate::<entity::category::Entity, entity::content_category::Entity, _>(
            "category",
            content_id,
            ids,
            entity::category::Column::Id,
            [
                entity::content_category::Column::ContentId,
                entity::content_category::Column::CategoryId,
            ],
            |category_id| entity::content_category::ActiveModel {
                content_id: ActiveValue::Set(content_id),
                category_id: ActiveValue::Set(category_id),
            },
        )
        .await
    }

    /// Links sponsors to a content item with set semantics.
    ///
    /// Behaves like [`ContentRepository::associate_genres`].
    pub async fn associate_sponsors(
        &self,
        content_id: i32,
        ids: &[i32],
    ) -> Result<Vec<i32>, AppError> {
        self.associate::<entity::sponsor::Entity, entity::content_sponsor::Entity, _>(
            "sponsor",
            content_id,
            ids,
            entity::sponsor::Column::Id,
            [
                entity::content_sponsor::Column::ContentId,
                entity::content_sponsor::Column::SponsorId,
            ],
            |sponsor_id| entity::content_sponsor::ActiveModel {
                content_id: ActiveValue::Set(content_id),
                sponsor_id: ActiveValue::Set(sponsor_id),
            },
        )
        .await
    }

    /// Inserts junction rows linking `content_id` to every existing tag in `ids`.
    ///
    /// `tag_id` is the primary key column of the tag table, `link_key` the junction
    /// table's `(content, tag)` key, and `link` builds one junction row for a tag id.
    async fn associate<T, J, A>(
        &self,
        kind: &'static str,
        content_id: i32,
        ids: &[i32],
        tag_id: T::Column,
        link_key: [J::Column; 2],
        link: impl Fn(i32) -> A,
    ) -> Result<Vec<i32>, AppError>
    where
        T: EntityTrait,
        J: EntityTrait,
        A: ActiveModelTrait<Entity = J> + Send,
        J::Model: IntoActiveModel<A>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let requested = dedup(ids);
        let existing: HashSet<i32> = T::find()
            .select_only()
            .column(tag_id)
            .filter(tag_id.is_in(requested.clone()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();
        let valid = keep_existing(kind, content_id, requested, &existing)?;

        J::insert_many(valid.iter().map(|&id| link(id)))
            .on_conflict(OnConflict::columns(link_key).do_nothing().to_owned())
            .exec_without_returning(self.db)
            .await?;

        Ok(valid)
    }

    /// Converts content rows and attaches their genres, categories and sponsors.
    async fn with_tags(&self, entities: Vec<entity::content::Model>) -> Result<Vec<Content>, AppError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();

        let mut genres: HashMap<i32, Vec<Genre>> = HashMap::new();
        for (link, genre) in entity::prelude::ContentGenre::find()
            .filter(entity::content_genre::Column::ContentId.is_in(ids.clone()))
            .find_also_related(entity::prelude::Genre)
            .all(self.db)
            .await?
        {
            if let Some(genre) = genre {
                genres
                    .entry(link.content_id)
                    .or_default()
                    .push(Genre::from_entity(genre));
            }
        }

        let mut categories: HashMap<i32, Vec<Category>> = HashMap::new();
        for (link, category) in entity::prelude::ContentCategory::find()
            .filter(entity::content_category::Column::ContentId.is_in(ids.clone()))
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?
        {
            if let Some(category) = category {
                categories
                    .entry(link.content_id)
                    .or_default()
                    .push(Category::from_entity(category));
            }
        }

        let mut sponsors: HashMap<i32, Vec<Sponsor>> = HashMap::new();
        for (link, sponsor) in entity::prelude::ContentSponsor::find()
            .filter(entity::content_sponsor::Column::ContentId.is_in(ids))
            .find_also_related(entity::prelude::Sponsor)
            .all(self.db)
            .await?
        {
            if let Some(sponsor) = sponsor {
                sponsors
                    .entry(link.content_id)
                    .or_default()
                    .push(Sponsor::from_entity(sponsor)?);
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let id = entity.id;
                let mut content = Content::from_entity(entity);

                content.genres = genres.remove(&id).unwrap_or_default();
                content.genres.sort_by_key(|g| g.id);
                content.categories = categories.remove(&id).unwrap_or_default();
                content.categories.sort_by_key(|c| c.id);
                content.sponsors = sponsors.remove(&id).unwrap_or_default();
                content.sponsors.sort_by_key(|s| s.id);

                content
            })
            .collect())
    }
}

/// Sorted, duplicate-free copy of `ids`.
fn dedup(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Filters `requested` down to ids present in `existing`, warning about the rest.
fn keep_existing(
    kind: &'static str,
    content_id: i32,
    requested: Vec<i32>,
    existing: &HashSet<i32>,
) -> Result<Vec<i32>, AppError> {
    let (valid, skipped): (Vec<i32>, Vec<i32>) =
        requested.into_iter().partition(|id| existing.contains(id));

    if !skipped.is_empty() {
        tracing::warn!(
            "Skipping nonexistent {} ids {:?} for content {}",
            kind,
            skipped,
            content_id
        );
    }

    if valid.is_empty() {
        return Err(ContentError::NoValidAssociations { kind }.into());
    }

    Ok(valid)
}
