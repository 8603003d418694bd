use super::*;

/// Tests title search with `LIKE` wildcard characters in the term.
///
/// Expected: `%` and `_` match only themselves, not any text
#[tokio::test]
async fn find_by_title_treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    for title in ["50% off", "Nightfall", "Morning Show", "back\\slash"] {
        factory::content::ContentFactory::new(db, creator.id)
            .title(title)
            .build()
            .await?;
    }

    let repo = ContentRepository::new(db);
    let percent: Vec<String> = repo
        .find_by_title("%")
        .await?
        .into_iter()
        .map(|c| c.title)
        .collect();
    let underscore = repo.find_by_title("_").await?;
    let backslash = repo.find_by_title("\\").await?;

    assert_eq!(percent, vec!["50% off".to_string()]);
    assert!(underscore.is_empty());
    assert_eq!(backslash.len(), 1);

    Ok(())
}

/// Tests finding content by ID with its associations.
///
/// Expected: Ok(Some) with the linked genre, category and sponsor attached
#[tokio::test]
async fn find_by_id_includes_associations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, content, genre, category, sponsor) =
        factory::helpers::create_content_with_tags(db).await?;

    let repo = ContentRepository::new(db);
    let found = repo.find_by_id(content.id).await?.unwrap();

    assert_eq!(found.id, content.id);
    assert_eq!(found.genres.iter().map(|g| g.id).collect::<Vec<_>>(), vec![genre.id]);
    assert_eq!(found.categories.iter().map(|c| c.id).collect::<Vec<_>>(), vec![category.id]);
    assert_eq!(found.sponsors.iter().map(|s| s.id).collect::<Vec<_>>(), vec![sponsor.id]);

    Ok(())
}

/// Tests finding content by an ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}

/// Tests substring search on titles.
///
/// Expected: Ok with only the titles containing the search term
#[tokio::test]
async fn find_by_title_matches_substring() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    for title in ["The Night Shift", "Nightfall", "Morning Show"] {
        factory::content::ContentFactory::new(db, creator.id)
            .title(title)
            .build()
            .await?;
    }

    let repo = ContentRepository::new(db);
    let found = repo.find_by_title("Night").await?;

    let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["The Night Shift", "Nightfall"]);

    Ok(())
}

/// Tests listing content by creator.
///
/// Expected: Ok with only the given creator's content
#[tokio::test]
async fn find_by_creator_id_filters_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_content(db, alice.id).await?;
    factory::create_content(db, alice.id).await?;
    factory::create_content(db, bob.id).await?;

    let repo = ContentRepository::new(db);
    let found = repo.find_by_creator_id(alice.id).await?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|c| c.creator_id == alice.id));

    Ok(())
}

/// Tests listing every content item.
///
/// Expected: Ok with all rows in ID order
#[tokio::test]
async fn find_all_returns_every_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let creator = factory::create_user(db).await?;
    let first = factory::create_content(db, creator.id).await?;
    let second = factory::create_content(db, creator.id).await?;

    let repo = ContentRepository::new(db);
    let ids: Vec<i32> = repo.find_all().await?.into_iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
