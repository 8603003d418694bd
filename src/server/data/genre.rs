//! Genre data repository for database operations.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::contains_pattern;
use crate::server::model::genre::{CreateGenreParams, Genre, UpdateGenreParams};

pub struct GenreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GenreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a genre.
    ///
    /// # Returns
    /// - `Ok(Genre)` - The created genre
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, param: CreateGenreParams) -> Result<Genre, DbErr> {
        let entity = entity::prelude::Genre::insert(entity::genre::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Genre::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Genre::from_entity))
    }

    /// Finds the genre with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Genre::from_entity))
    }

    /// Finds genres whose name contains `name`, ordered by name.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Genre>, DbErr> {
        let entities = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Name.like(contains_pattern(name)))
            .order_by_asc(entity::genre::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<Genre>, DbErr> {
        let entities = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    /// Renames a genre when a new name is given.
    ///
    /// # Returns
    /// - `Ok(Some(Genre))` - The genre after the update
    /// - `Ok(None)` - No genre with that ID
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn update(&self, param: UpdateGenreParams) -> Result<Option<Genre>, DbErr> {
        let Some(existing) = entity::prelude::Genre::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        let Some(name) = param.name else {
            return Ok(Some(Genre::from_entity(existing)));
        };

        let mut active: entity::genre::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);

        let entity = entity::prelude::Genre::update(active).exec(self.db).await?;

        Ok(Some(Genre::from_entity(entity)))
    }

    /// Deletes a genre and unlinks it from all content.
    ///
    /// # Returns
    /// - `Ok(true)` - Genre deleted
    /// - `Ok(false)` - No genre with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ContentGenre::delete_many()
            .filter(entity::content_genre::Column::GenreId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Genre::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
