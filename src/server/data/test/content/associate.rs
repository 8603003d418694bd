use super::*;

/// Tests associating a mix of existing and nonexistent genre ids.
///
/// Verifies that the nonexistent id is skipped while the valid ones are linked.
///
/// Expected: Ok with [g1, g2] linked and 999 ignored
#[tokio::test]
async fn skips_invalid_ids_when_some_are_valid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;
    let g1 = factory::create_genre(db).await?;
    let g2 = factory::create_genre(db).await?;

    let repo = ContentRepository::new(db);
    let linked = repo.associate_genres(content.id, &[g1.id, g2.id, 999]).await?;

    assert_eq!(linked, vec![g1.id, g2.id]);
    let found = repo.find_by_id(content.id).await?.unwrap();
    assert_eq!(found.genres.len(), 2);

    Ok(())
}

/// Tests associating only nonexistent genre ids.
///
/// Expected: Err(NoValidAssociations) and no link rows written
#[tokio::test]
async fn fails_when_all_ids_invalid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;

    let repo = ContentRepository::new(db);
    let result = repo.associate_genres(content.id, &[998, 999]).await;

    assert!(matches!(
        result,
        Err(AppError::ContentErr(ContentError::NoValidAssociations { kind: "genre" }))
    ));
    assert!(repo.find_by_id(content.id).await?.unwrap().genres.is_empty());

    Ok(())
}

/// Tests that duplicate ids and already-linked ids are ignored.
///
/// Expected: Ok with a single link row for the genre
#[tokio::test]
async fn has_set_semantics() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;
    let genre = factory::create_genre(db).await?;

    let repo = ContentRepository::new(db);
    repo.associate_genres(content.id, &[genre.id, genre.id]).await?;
    repo.associate_genres(content.id, &[genre.id]).await?;

    let found = repo.find_by_id(content.id).await?.unwrap();
    assert_eq!(found.genres.len(), 1);

    Ok(())
}

/// Tests that an empty id list is a no-op.
///
/// Expected: Ok with nothing linked
#[tokio::test]
async fn empty_request_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;

    let repo = ContentRepository::new(db);

    assert!(repo.associate_sponsors(content.id, &[]).await?.is_empty());

    Ok(())
}

/// Tests associating categories and sponsors.
///
/// Expected: Ok with both kinds attached on read
#[tokio::test]
async fn links_categories_and_sponsors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;
    let category = factory::create_category(db).await?;
    let sponsor = factory::create_sponsor(db).await?;

    let repo = ContentRepository::new(db);
    repo.associate_categories(content.id, &[category.id, 404]).await?;
    repo.associate_sponsors(content.id, &[sponsor.id]).await?;

    let found = repo.find_by_id(content.id).await?.unwrap();
    assert_eq!(found.categories[0].id, category.id);
    assert_eq!(found.sponsors[0].id, sponsor.id);

    Ok(())
}

/// Tests that category and sponsor links report their own kind when every id is
/// invalid, and ignore repeated ids.
///
/// Expected: Err(NoValidAssociations) naming the kind; one link per sponsor after repeats
#[tokio::test]
async fn category_and_sponsor_links_follow_genre_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let content = factory::create_content(db, creator.id).await?;
    let sponsor = factory::create_sponsor(db).await?;

    let repo = ContentRepository::new(db);
    let categories = repo.associate_categories(content.id, &[404]).await;
    let sponsors = repo.associate_sponsors(content.id, &[405, 406]).await;
    repo.associate_sponsors(content.id, &[sponsor.id, sponsor.id]).await?;
    repo.associate_sponsors(content.id, &[sponsor.id]).await?;

    assert!(matches!(
        categories,
        Err(AppError::ContentErr(ContentError::NoValidAssociations { kind: "category" }))
    ));
    assert!(matches!(
        sponsors,
        Err(AppError::ContentErr(ContentError::NoValidAssociations { kind: "sponsor" }))
    ));
    assert_eq!(repo.find_by_id(content.id).await?.unwrap().sponsors.len(), 1);

    Ok(())
}
