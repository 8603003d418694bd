use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, CacheAside, CacheStore, LIST_TTL},
    data::sponsor::SponsorRepository,
    error::AppError,
    model::sponsor::{CreateSponsorParams, Sponsor, UpdateSponsorParams},
};

pub struct SponsorService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
}

impl<'a> SponsorService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore) -> Self {
        Self { db, cache }
    }

    /// Creates a sponsor and invalidates the sponsor list.
    ///
    /// # Returns
    /// - `Ok(Sponsor)` - The created sponsor
    /// - `Err(AppError::BadRequest)` - A sponsor with that name exists
    pub async fn create(&self, params: CreateSponsorParams) -> Result<Sponsor, AppError> {
        let repo = SponsorRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest("Sponsor already exists".to_string()));
        }

        let sponsor = repo.create(params).await?;

        CacheAside::new(self.cache).invalidate(keys::ALL_SPONSOR).await?;

        Ok(sponsor)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Sponsor>, AppError> {
        SponsorRepository::new(self.db).find_by_id(id).await
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Sponsor>, AppError> {
        SponsorRepository::new(self.db).search_by_name(name).await
    }

    /// All sponsors, served from the cache while the snapshot is live.
    pub async fn get_all(&self) -> Result<Vec<Sponsor>, AppError> {
        let repo = SponsorRepository::new(self.db);

        CacheAside::new(self.cache)
            .get_or_load(keys::ALL_SPONSOR, LIST_TTL, || repo.find_all())
            .await
    }

    /// Updates a sponsor, invalidating the sponsor and content lists.
    ///
    /// # Returns
    /// - `Ok(Some(Sponsor))` - The updated sponsor
    /// - `Ok(None)` - No sponsor with that ID
    /// - `Err(AppError::BadRequest)` - Another sponsor has the new name
    pub async fn update(&self, params: UpdateSponsorParams) -> Result<Option<Sponsor>, AppError> {
        let repo = SponsorRepository::new(self.db);

        if let Some(ref name) = params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::BadRequest("Sponsor already exists".to_string()));
                }
            }
        }

        let sponsor = repo.update(params).await?;

        if sponsor.is_some() {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_SPONSOR).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(sponsor)
    }

    /// Deletes a sponsor, unlinking it from content.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = SponsorRepository::new(self.db).delete(id).await?;

        if deleted {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_SPONSOR).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(deleted)
    }
}
