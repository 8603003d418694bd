//! Sponsor data repository for database operations.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use super::contains_pattern;
use crate::server::{
    error::AppError,
    model::sponsor::{CreateSponsorParams, Sponsor, UpdateSponsorParams},
};

pub struct SponsorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SponsorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a sponsor.
    ///
    /// # Returns
    /// - `Ok(Sponsor)` - The created sponsor
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSponsorParams) -> Result<Sponsor, AppError> {
        let entity = entity::prelude::Sponsor::insert(entity::sponsor::ActiveModel {
            name: ActiveValue::Set(param.name),
            sponsor_status: ActiveValue::Set(param.sponsor_status.to_string()),
            link: ActiveValue::Set(param.link),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Sponsor::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sponsor>, AppError> {
        let entity = entity::prelude::Sponsor::find_by_id(id).one(self.db).await?;

        entity.map(Sponsor::from_entity).transpose()
    }

    /// Finds the sponsor with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Sponsor>, AppError> {
        let entity = entity::prelude::Sponsor::find()
            .filter(entity::sponsor::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(Sponsor::from_entity).transpose()
    }

    /// Finds sponsors whose name contains `name`, ordered by name.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Sponsor>, AppError> {
        let entities = entity::prelude::Sponsor::find()
            .filter(entity::sponsor::Column::Name.like(contains_pattern(name)))
            .order_by_asc(entity::sponsor::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Sponsor::from_entity).collect()
    }

    pub async fn find_all(&self) -> Result<Vec<Sponsor>, AppError> {
        let entities = entity::prelude::Sponsor::find()
            .order_by_asc(entity::sponsor::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Sponsor::from_entity).collect()
    }

    /// Applies a partial update to a sponsor.
    ///
    /// # Returns
    /// - `Ok(Some(Sponsor))` - The sponsor after the update
    /// - `Ok(None)` - No sponsor with that ID
    /// - `Err(AppError)` - Database error or unreadable stored status
    pub async fn update(&self, param: UpdateSponsorParams) -> Result<Option<Sponsor>, AppError> {
        let Some(existing) = entity::prelude::Sponsor::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        if param.name.is_none() && param.sponsor_status.is_none() && param.link.is_none() {
            return Sponsor::from_entity(existing).map(Some);
        }

        let mut active: entity::sponsor::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(status) = param.sponsor_status {
            active.sponsor_status = ActiveValue::Set(status.to_string());
        }
        if let Some(link) = param.link {
            active.link = ActiveValue::Set(link);
        }

        let entity = entity::prelude::Sponsor::update(active).exec(self.db).await?;

        Sponsor::from_entity(entity).map(Some)
    }

    /// Deletes a sponsor and unlinks it from all content.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::ContentSponsor::delete_many()
            .filter(entity::content_sponsor::Column::SponsorId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Sponsor::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
