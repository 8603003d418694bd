use super::*;

/// Tests creating a content row.
///
/// Verifies that the repository inserts the row with the supplied values and stamps
/// the upload time.
///
/// Expected: Ok with content created and no associations
#[tokio::test]
async fn creates_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;

    let repo = ContentRepository::new(db);
    let before = chrono::Utc::now();
    let content = repo
        .create(NewContent {
            content_file_path: Some("/uploads/1-2.mp4".to_string()),
            ..new_content(creator.id, "Pilot")
        })
        .await?;

    assert_eq!(content.creator_id, creator.id);
    assert_eq!(content.title, "Pilot");
    assert!(content.visibility);
    assert_eq!(content.content_file_path.as_deref(), Some("/uploads/1-2.mp4"));
    assert_eq!(content.thumbnail_file_path, None);
    assert!(content.uploaded_at >= before - chrono::Duration::seconds(1));
    assert!(content.genres.is_empty());

    Ok(())
}

/// Tests creating content for a creator that does not exist.
///
/// Verifies that the foreign key to the user table is enforced.
///
/// Expected: Err with database error
#[tokio::test]
async fn fails_for_missing_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);
    let result = repo.create(new_content(999, "Orphan")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
