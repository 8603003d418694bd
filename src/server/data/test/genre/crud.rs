use super::*;

/// Tests creating and reading back a genre.
///
/// Expected: Ok with the genre retrievable by ID and by exact name
#[tokio::test]
async fn creates_and_finds_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    let genre = repo
        .create(CreateGenreParams {
            name: "Drama".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_id(genre.id).await?, Some(genre.clone()));
    assert_eq!(repo.find_by_name("Drama").await?, Some(genre));

    Ok(())
}

/// Tests renaming a genre and renaming one that does not exist.
///
/// Expected: Ok(Some) with new name, then Ok(None)
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let genre = factory::create_genre(db).await?;

    let repo = GenreRepository::new(db);
    let updated = repo
        .update(UpdateGenreParams {
            id: genre.id,
            name: Some("Thriller".to_string()),
        })
        .await?;
    let missing = repo
        .update(UpdateGenreParams {
            id: 999,
            name: Some("Nope".to_string()),
        })
        .await?;

    assert_eq!(updated.map(|g| g.name), Some("Thriller".to_string()));
    assert!(missing.is_none());

    Ok(())
}

/// Tests deleting a genre linked to content.
///
/// Expected: Ok(true) with the content's link removed
#[tokio::test]
async fn delete_unlinks_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, genre, _, _) = factory::helpers::create_content_with_tags(db).await?;

    let repo = GenreRepository::new(db);

    assert!(repo.delete(genre.id).await?);
    assert!(repo.find_by_id(genre.id).await?.is_none());
    assert!(!repo.delete(genre.id).await?);

    Ok(())
}
