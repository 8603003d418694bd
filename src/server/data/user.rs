//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, partial updates, lookups by the various login identifiers,
//! and deletion, converting entity models into domain models at the boundary.

use sea_orm::{
    sea_query::Condition, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::prefix_pattern;
use crate::server::model::user::{NewUser, User, UserChanges};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Row values including the already-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, param: NewUser) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            hashed_password: ActiveValue::Set(param.hashed_password),
            is_admin: ActiveValue::Set(param.is_admin),
            pp_url: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every user whose ID is in `ids`; unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose username or email equals `identifier`.
    ///
    /// Used by login, which accepts either.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(identifier))
                    .add(entity::user::Column::Email.eq(identifier)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds users whose display name starts with `prefix`, ordered by name.
    pub async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Name.like(prefix_pattern(prefix)))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Returns every user ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update to a user row.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `changes` - Columns to overwrite; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(User::from_entity(existing)));
        }

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(username) = changes.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(hashed_password) = changes.hashed_password {
            active.hashed_password = ActiveValue::Set(hashed_password);
        }
        if let Some(pp_url) = changes.pp_url {
            active.pp_url = ActiveValue::Set(Some(pp_url));
        }

        let entity = entity::prelude::User::update(active).exec(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user; their content rows cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
