//! Content lifecycle: uploads, transactional writes, cache invalidation and
//! subscriber notification.
//!
//! Every successful mutation deletes the `allContent` snapshot before returning, so a
//! caller that observed the write never reads a list that predates it.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    cache::{keys, CacheAside, CacheStore, LIST_TTL},
    data::{content::ContentRepository, user::UserRepository},
    error::AppError,
    model::content::{
        Content, ContentChanges, ContentUploads, CreateContentParams, NewContent, TagIds,
        UpdateContentParams,
    },
    storage::FileStore,
    subscription::NotificationDispatcher,
};

/// Paths of files written for one request.
#[derive(Debug, Default)]
struct StoredUploads {
    content_file_path: Option<String>,
    thumbnail_file_path: Option<String>,
}

impl StoredUploads {
    async fn discard(&self, files: &FileStore) {
        files.discard(self.content_file_path.as_deref()).await;
        files.discard(self.thumbnail_file_path.as_deref()).await;
    }
}

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
    files: &'a FileStore,
    notifier: &'a dyn NotificationDispatcher,
}

impl<'a> ContentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a dyn CacheStore,
        files: &'a FileStore,
        notifier: &'a dyn NotificationDispatcher,
    ) -> Self {
        Self {
            db,
            cache,
            files,
            notifier,
        }
    }

    /// Creates a content item with its files and associations.
    ///
    /// The row and its association rows are written in one transaction. Files stored for
    /// the request are removed again if that transaction fails. After commit the content
    /// list is invalidated and the subscription service is notified; a failed
    /// notification is logged and does not fail the create.
    ///
    /// # Returns
    /// - `Ok(Content)` - The created content with its associations
    /// - `Err(AppError::NotFound)` - Creator does not exist
    /// - `Err(AppError::ContentErr(NoValidAssociations))` - A non-empty id list had no valid id
    pub async fn create(&self, params: CreateContentParams) -> Result<Content, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(params.creator_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Creator not found".to_string()));
        }

        let stored = self.store_uploads(&params.uploads).await?;

        let id = match self.insert(&params, &stored).await {
            Ok(id) => id,
            Err(e) => {
                stored.discard(self.files).await;
                return Err(e);
            }
        };

        CacheAside::new(self.cache).invalidate(keys::ALL_CONTENT).await?;

        if let Err(e) = self.notifier.notify_on_create(params.creator_id).await {
            tracing::warn!(
                "Failed to notify subscribers of creator {} about content {}: {}",
                params.creator_id,
                id,
                e
            );
        }

        tracing::info!("Created content {} for creator {}", id, params.creator_id);

        self.reload(id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Content>, AppError> {
        ContentRepository::new(self.db).find_by_id(id).await
    }

    pub async fn search_by_title(&self, title: &str) -> Result<Vec<Content>, AppError> {
        ContentRepository::new(self.db).find_by_title(title).await
    }

    pub async fn get_by_creator(&self, creator_id: i32) -> Result<Vec<Content>, AppError> {
        ContentRepository::new(self.db)
            .find_by_creator_id(creator_id)
            .await
    }

    /// All content, served from the `allContent` snapshot while it is live.
    pub async fn get_all(&self) -> Result<Vec<Content>, AppError> {
        let repo = ContentRepository::new(self.db);

        CacheAside::new(self.cache)
            .get_or_load(keys::ALL_CONTENT, LIST_TTL, || repo.find_all())
            .await
    }

    /// Applies a partial update to `existing`.
    ///
    /// File paths change only when a new file is uploaded; the replaced file is removed
    /// once the update commits. New association ids are added to the existing sets.
    ///
    /// # Returns
    /// - `Ok(Content)` - The updated content
    /// - `Err(AppError::ContentErr(NoValidAssociations))` - A non-empty id list had no valid id
    pub async fn update(
        &self,
        existing: &Content,
        params: UpdateContentParams,
    ) -> Result<Content, AppError> {
        let stored = self.store_uploads(&params.uploads).await?;

        let changes = ContentChanges {
            title: params.title,
            description: params.description,
            visibility: params.visibility,
            content_file_path: stored.content_file_path.clone(),
            thumbnail_file_path: stored.thumbnail_file_path.clone(),
        };

        if let Err(e) = self.apply(existing.id, changes, &params.tags).await {
            stored.discard(self.files).await;
            return Err(e);
        }

        CacheAside::new(self.cache).invalidate(keys::ALL_CONTENT).await?;

        if stored.content_file_path.is_some() {
            self.files
                .discard(existing.content_file_path.as_deref())
                .await;
        }
        if stored.thumbnail_file_path.is_some() {
            self.files
                .discard(existing.thumbnail_file_path.as_deref())
                .await;
        }

        self.reload(existing.id).await
    }

    /// Deletes `content`, its association rows and its files.
    ///
    /// # Returns
    /// - `Ok(true)` - Content deleted
    /// - `Ok(false)` - Content was already gone
    pub async fn delete(&self, content: &Content) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let deleted = ContentRepository::new(&txn).delete(content.id).await?;
        txn.commit().await?;

        if !deleted {
            return Ok(false);
        }

        CacheAside::new(self.cache).invalidate(keys::ALL_CONTENT).await?;

        self.files
            .discard(content.content_file_path.as_deref())
            .await;
        self.files
            .discard(content.thumbnail_file_path.as_deref())
            .await;

        tracing::info!("Deleted content {}", content.id);

        Ok(true)
    }

    async fn insert(
        &self,
        params: &CreateContentParams,
        stored: &StoredUploads,
    ) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        let content = ContentRepository::new(&txn)
            .create(NewContent {
                creator_id: params.creator_id,
                title: params.title.clone(),
                description: params.description.clone(),
                visibility: params.visibility,
                content_file_path: stored.content_file_path.clone(),
                thumbnail_file_path: stored.thumbnail_file_path.clone(),
            })
            .await?;

        Self::associate(&txn, content.id, &params.tags).await?;

        txn.commit().await?;

        Ok(content.id)
    }

    async fn apply(&self, id: i32, changes: ContentChanges, tags: &TagIds) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !ContentRepository::new(&txn).update(id, changes).await? {
            return Err(AppError::NotFound("Content not found".to_string()));
        }

        Self::associate(&txn, id, tags).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn associate(txn: &DatabaseTransaction, id: i32, tags: &TagIds) -> Result<(), AppError> {
        let repo = ContentRepository::new(txn);

        repo.associate_genres(id, &tags.genre_ids).await?;
        repo.associate_categories(id, &tags.category_ids).await?;
        repo.associate_sponsors(id, &tags.sponsor_ids).await?;

        Ok(())
    }

    /// Stores the uploaded files, removing any already written if a later one fails.
    async fn store_uploads(&self, uploads: &ContentUploads) -> Result<StoredUploads, AppError> {
        let mut stored = StoredUploads::default();

        if let Some(ref file) = uploads.content_file {
            stored.content_file_path = Some(self.files.save(file).await?);
        }

        if let Some(ref file) = uploads.thumbnail_file {
            match self.files.save(file).await {
                Ok(path) => stored.thumbnail_file_path = Some(path),
                Err(e) => {
                    stored.discard(self.files).await;
                    return Err(e);
                }
            }
        }

        Ok(stored)
    }

    async fn reload(&self, id: i32) -> Result<Content, AppError> {
        ContentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Content {} vanished after write", id)))
    }
}
