use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, CacheAside, CacheStore, LIST_TTL},
    data::genre::GenreRepository,
    error::AppError,
    model::genre::{CreateGenreParams, Genre, UpdateGenreParams},
};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore) -> Self {
        Self { db, cache }
    }

    /// Creates a genre and invalidates the genre list.
    ///
    /// # Returns
    /// - `Ok(Genre)` - The created genre
    /// - `Err(AppError::BadRequest)` - A genre with that name exists
    pub async fn create(&self, params: CreateGenreParams) -> Result<Genre, AppError> {
        let repo = GenreRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest("Genre already exists".to_string()));
        }

        let genre = repo.create(params).await?;

        CacheAside::new(self.cache).invalidate(keys::ALL_GENRE).await?;

        Ok(genre)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        Ok(repo.search_by_name(name).await?)
    }

    /// All genres, served from the cache while the snapshot is live.
    pub async fn get_all(&self) -> Result<Vec<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        CacheAside::new(self.cache)
            .get_or_load(keys::ALL_GENRE, LIST_TTL, || async {
                Ok(repo.find_all().await?)
            })
            .await
    }

    /// Renames a genre.
    ///
    /// Invalidates the genre list and the content list, which embeds genre names.
    ///
    /// # Returns
    /// - `Ok(Some(Genre))` - The updated genre
    /// - `Ok(None)` - No genre with that ID
    /// - `Err(AppError::BadRequest)` - Another genre has the new name
    pub async fn update(&self, params: UpdateGenreParams) -> Result<Option<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        if let Some(ref name) = params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::BadRequest("Genre already exists".to_string()));
                }
            }
        }

        let genre = repo.update(params).await?;

        if genre.is_some() {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_GENRE).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(genre)
    }

    /// Deletes a genre, unlinking it from content.
    ///
    /// # Returns
    /// - `Ok(true)` - Genre deleted
    /// - `Ok(false)` - No genre with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = GenreRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            let cache = CacheAside::new(self.cache);
            cache.invalidate(keys::ALL_GENRE).await?;
            cache.invalidate(keys::ALL_CONTENT).await?;
        }

        Ok(deleted)
    }
}
