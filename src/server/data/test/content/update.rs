use super::*;

/// Tests that a partial update leaves omitted columns unchanged.
///
/// Expected: Ok(true) with only the title changed
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::content::ContentFactory::new(db, creator.id)
        .title("Old")
        .description("kept")
        .thumbnail_file_path("/uploads/thumb.png")
        .build()
        .await?;

    let repo = ContentRepository::new(db);
    let updated = repo
        .update(
            content.id,
            ContentChanges {
                title: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    let found = repo.find_by_id(content.id).await?.unwrap();
    assert_eq!(found.title, "New");
    assert_eq!(found.description, "kept");
    assert_eq!(found.thumbnail_file_path.as_deref(), Some("/uploads/thumb.png"));

    Ok(())
}

/// Tests updating content that does not exist.
///
/// Expected: Ok(false) for both empty and non-empty changes
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);

    assert!(!repo.update(7, ContentChanges::default()).await?);
    assert!(
        !repo
            .update(
                7,
                ContentChanges {
                    visibility: Some(false),
                    ..Default::default()
                }
            )
            .await?
    );

    Ok(())
}
