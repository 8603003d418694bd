//! Genre factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a genre with the given name.
pub async fn create_genre_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::genre::Model, DbErr> {
    entity::genre::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a genre named `"Genre {id}"`.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    create_genre_named(db, format!("Genre {}", next_id())).await
}
