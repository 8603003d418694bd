use super::*;

/// Tests creating a category and finding it by ID, exact name and substring.
///
/// Expected: Ok with the category found by each lookup
#[tokio::test]
async fn creates_and_finds_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::category::create_category_named(db, "Animation").await?;

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Documentary".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_id(category.id).await?, Some(category.clone()));
    assert_eq!(repo.find_by_name("Documentary").await?, Some(category.clone()));
    assert_eq!(repo.search_by_name("cument").await?, vec![category]);
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}

/// Tests that an update without a name leaves the category unchanged.
///
/// Expected: Ok(Some) with the existing name
#[tokio::test]
async fn empty_update_keeps_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await?;

    let updated = CategoryRepository::new(db)
        .update(UpdateCategoryParams {
            id: category.id,
            name: None,
        })
        .await?;

    assert_eq!(updated.map(|c| c.name), Some(category.name));

    Ok(())
}

/// Tests deleting a category twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(category.id).await?);
    assert!(!repo.delete(category.id).await?);

    Ok(())
}
