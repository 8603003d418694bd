//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep usernames, emails and tag names unique across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a content row to a genre.
pub async fn link_genre(
    db: &DatabaseConnection,
    content_id: i32,
    genre_id: i32,
) -> Result<entity::content_genre::Model, DbErr> {
    entity::content_genre::ActiveModel {
        content_id: ActiveValue::Set(content_id),
        genre_id: ActiveValue::Set(genre_id),
    }
    .insert(db)
    .await
}

/// Creates a creator with one content item linked to a fresh genre, category and sponsor.
///
/// # Returns
/// - `Ok((creator, content, genre, category, sponsor))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_content_with_tags(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::content::Model,
        entity::genre::Model,
        entity::category::Model,
        entity::sponsor::Model,
    ),
    DbErr,
> {
    let creator = crate::factory::user::create_user(db).await?;
    let content = crate::factory::content::create_content(db, creator.id).await?;
    let genre = crate::factory::genre::create_genre(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let sponsor = crate::factory::sponsor::create_sponsor(db).await?;

    link_genre(db, content.id, genre.id).await?;

    entity::content_category::ActiveModel {
        content_id: ActiveValue::Set(content.id),
        category_id: ActiveValue::Set(category.id),
    }
    .insert(db)
    .await?;

    entity::content_sponsor::ActiveModel {
        content_id: ActiveValue::Set(content.id),
        sponsor_id: ActiveValue::Set(sponsor.id),
    }
    .insert(db)
    .await?;

    Ok((creator, content, genre, category, sponsor))
}
