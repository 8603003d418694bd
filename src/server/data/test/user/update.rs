use super::*;

/// Tests a partial update of a user.
///
/// Expected: Ok(Some) with name and picture changed, email untouched
#[tokio::test]
async fn updates_given_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                pp_url: Some("/uploads/me.png".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.pp_url.as_deref(), Some("/uploads/me.png"));
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests that an empty update returns the user unchanged.
///
/// Expected: Ok(Some) equal to the stored user
#[tokio::test]
async fn empty_update_returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update(user.id, UserChanges::default()).await?.unwrap();

    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            77,
            UserChanges {
                name: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
