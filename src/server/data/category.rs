//! Category data repository for database operations.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::contains_pattern;
use crate::server::model::category::{CreateCategoryParams, Category, UpdateCategoryParams};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, param: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::prelude::Category::insert(entity::category::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds the category with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds categories whose name contains `name`, ordered by name.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.like(contains_pattern(name)))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Renames a category when a new name is given.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The category after the update
    /// - `Ok(None)` - No category with that ID
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn update(&self, param: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        let Some(name) = param.name else {
            return Ok(Some(Category::from_entity(existing)));
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);

        let entity = entity::prelude::Category::update(active).exec(self.db).await?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Deletes a category and unlinks it from all content.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ContentCategory::delete_many()
            .filter(entity::content_category::Column::CategoryId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Category::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
