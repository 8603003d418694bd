use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, CacheAside, CacheStore},
    data::{content::ContentRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, NewUser, UpdateUserParams, User, UserChanges},
    service::auth::password::hash_password,
    storage::FileStore,
    subscription::NotificationDispatcher,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
    files: &'a FileStore,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore, files: &'a FileStore) -> Self {
        Self { db, cache, files }
    }

    /// Creates a user after checking that username and email are free.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username or email already in use
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        self.ensure_available(Some(&params.username), Some(&params.email), None)
            .await?;

        let user = repo
            .create(NewUser {
                username: params.username,
                name: params.name,
                email: params.email,
                hashed_password: hash_password(&params.password)?,
                is_admin: params.is_admin,
            })
            .await?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_username(username).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Users whose display name starts with `prefix`.
    pub async fn search_by_name(&self, prefix: &str) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_name_prefix(prefix).await?)
    }

    /// Applies a profile update, storing a new picture if one was uploaded.
    ///
    /// The previous picture is removed once the new path is saved. A stored upload is
    /// removed again if the update itself fails.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - New username or email belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        self.ensure_available(
            params.username.as_deref().filter(|u| *u != existing.username),
            params.email.as_deref().filter(|e| *e != existing.email),
            Some(existing.id),
        )
        .await?;

        let hashed_password = params.password.as_deref().map(hash_password).transpose()?;

        let pp_url = match params.picture {
            Some(ref picture) => Some(self.files.save(picture).await?),
            None => None,
        };

        let changes = UserChanges {
            username: params.username,
            name: params.name,
            email: params.email,
            hashed_password,
            pp_url: pp_url.clone(),
        };

        let updated = match repo.update(existing.id, changes).await {
            Ok(updated) => updated,
            Err(e) => {
                self.files.discard(pp_url.as_deref()).await;
                return Err(e.into());
            }
        };

        if pp_url.is_some() {
            self.files.discard(existing.pp_url.as_deref()).await;
        }

        Ok(updated)
    }

    /// Deletes a user, their content (by cascade) and every file they referenced.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        let owned_content = ContentRepository::new(self.db).find_by_creator_id(id).await?;

        if !repo.delete(id).await? {
            return Ok(false);
        }

        if !owned_content.is_empty() {
            CacheAside::new(self.cache).invalidate(keys::ALL_CONTENT).await?;
        }

        self.files.discard(user.pp_url.as_deref()).await;
        for content in owned_content {
            self.files.discard(content.content_file_path.as_deref()).await;
            self.files.discard(content.thumbnail_file_path.as_deref()).await;
        }

        tracing::info!("Deleted user {}", id);

        Ok(true)
    }

    /// Emails of every existing user subscribed to `creator_id`.
    ///
    /// Subscriber ids come from the subscription service; ids with no local user are skipped.
    pub async fn subscriber_emails(
        &self,
        creator_id: i32,
        notifier: &dyn NotificationDispatcher,
    ) -> Result<Vec<String>, AppError> {
        let ids = notifier.list_subscriber_ids(creator_id).await?;

        let users = UserRepository::new(self.db).find_by_ids(&ids).await?;

        Ok(users.into_iter().map(|user| user.email).collect())
    }

    /// Fails if `username` or `email` is taken by a user other than `except_id`.
    async fn ensure_available(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(username) = username {
            if let Some(other) = repo.find_by_username(username).await? {
                if Some(other.id) != except_id {
                    return Err(AppError::BadRequest("Username already taken".to_string()));
                }
            }
        }

        if let Some(email) = email {
            if let Some(other) = repo.find_by_email(email).await? {
                if Some(other.id) != except_id {
                    return Err(AppError::BadRequest("Email already registered".to_string()));
                }
            }
        }

        Ok(())
    }
}
