use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, CacheAside, CacheStore, LIST_TTL},
    data::category::CategoryRepository,
    error::AppError,
    model::category::{CreateCategoryParams, Category, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore) -> Self {
        Self { db, cache }
    }

    /// Creates a category and invalidates the category list.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(AppError::BadRequest)` - A category with that name exists
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest("Category already exists".to_string()));
        }

        let category = repo.create(params).await?;

        CacheAside::new(self.cache).invalidate(keys::ALL_CATEGORY).await?;

        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.search_by_name(name).await?)
    }

    /// All categories, served from the cache while the snapshot is live.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        CacheAside::new(self.cache)
            .get_or_load(keys::ALL_CATEGORY, LIST_TTL, || async {
                Ok(repo.find_all().await?)
            })
            .await
    }

    /// Renames a category.
    ///
    /// Invalidates the category list and the content list, which embeds category names.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The updated category
    /// - `Ok(None)` - No category with that ID
    /// - `Err(AppError::BadRequest)` - Another category has the new name
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        if let Some(ref name) = params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::BadRequest("Category already exists".to_string()));
                }
            }
        }

        let category = repo.update(params).await?;

        if category.is_some() {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_CATEGORY).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(category)
    }

    /// Deletes a category, unlinking it from content.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_CATEGORY).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(deleted)
    }
}
