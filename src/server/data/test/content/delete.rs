use sea_orm::EntityTrait;

use super::*;

/// Tests deleting content together with its association rows.
///
/// Expected: Ok(true), content gone and the genre itself still present
#[tokio::test]
async fn deletes_content_and_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, content, genre, _, _) = factory::helpers::create_content_with_tags(db).await?;

    let repo = ContentRepository::new(db);
    let deleted = repo.delete(content.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(content.id).await?.is_none());
    let links = entity::prelude::ContentGenre::find().all(db).await?;
    assert!(links.is_empty());
    assert!(entity::prelude::Genre::find_by_id(genre.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting content that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);

    assert!(!repo.delete(5).await?);

    Ok(())
}
