use sea_orm::EntityTrait;

use super::*;

/// Tests that the sponsor status round-trips through its stored text form.
///
/// Expected: Ok with the status read back as the same variant
#[tokio::test]
async fn creates_sponsor_with_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SponsorRepository::new(db);
    let sponsor = repo
        .create(CreateSponsorParams {
            name: "Acme".to_string(),
            sponsor_status: SponsorStatus::Company,
            link: "https://acme.example".to_string(),
        })
        .await?;

    let stored = entity::prelude::Sponsor::find_by_id(sponsor.id).one(db).await?.unwrap();
    assert_eq!(stored.sponsor_status, "COMPANY");
    assert_eq!(repo.find_by_id(sponsor.id).await?, Some(sponsor));

    Ok(())
}

/// Tests a partial sponsor update.
///
/// Expected: Ok(Some) with status changed and name kept
#[tokio::test]
async fn updates_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sponsor = factory::sponsor::SponsorFactory::new(db)
        .name("Gov")
        .sponsor_status("ORGANIZATION")
        .build()
        .await?;

    let repo = SponsorRepository::new(db);
    let updated = repo
        .update(UpdateSponsorParams {
            id: sponsor.id,
            name: None,
            sponsor_status: Some(SponsorStatus::Government),
            link: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Gov");
    assert_eq!(updated.sponsor_status, SponsorStatus::Government);

    Ok(())
}

/// Tests that a row with an unknown stored status is reported, not silently mapped.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn unknown_stored_status_is_an_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sponsor = factory::sponsor::SponsorFactory::new(db)
        .sponsor_status("PARTNER")
        .build()
        .await?;

    let repo = SponsorRepository::new(db);
    let result = repo.find_by_id(sponsor.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}

/// Tests search, listing and deletion.
///
/// Expected: Ok with name matches, then one fewer sponsor after delete
#[tokio::test]
async fn searches_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let red = factory::sponsor::SponsorFactory::new(db).name("Red Co").build().await?;
    factory::sponsor::SponsorFactory::new(db).name("Blue Co").build().await?;

    let repo = SponsorRepository::new(db);

    assert_eq!(repo.search_by_name("Red").await?.len(), 1);
    assert!(repo.delete(red.id).await?);
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
