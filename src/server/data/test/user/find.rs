use super::*;

/// Tests login lookup by either username or email.
///
/// Expected: Ok(Some) for both identifiers, Ok(None) for an unknown one
#[tokio::test]
async fn find_by_identifier_matches_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .username("grace")
        .email("grace@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_identifier("grace").await?.map(|u| u.id), Some(user.id));
    assert_eq!(
        repo.find_by_identifier("grace@example.com").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_identifier("nobody").await?.is_none());

    Ok(())
}

/// Tests exact lookups by email and username.
///
/// Expected: Ok(Some) on exact match only
#[tokio::test]
async fn find_by_email_and_username_are_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .username("linus")
        .email("linus@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_email("linus@example.com").await?.map(|u| u.id), Some(user.id));
    assert_eq!(repo.find_by_username("linus").await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_username("lin").await?.is_none());

    Ok(())
}

/// Tests name prefix search.
///
/// Expected: Ok with only names starting with the prefix, ordered by name
#[tokio::test]
async fn find_by_name_prefix_matches_start_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for name in ["Martha", "Mark", "Amar"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let names: Vec<String> = repo
        .find_by_name_prefix("Mar")
        .await?
        .into_iter()
        .map(|u| u.name)
        .collect();

    assert_eq!(names, vec!["Mark".to_string(), "Martha".to_string()]);

    Ok(())
}

/// Tests name-prefix search with `LIKE` wildcard characters in the prefix.
///
/// Expected: only names literally starting with `100%_`
#[tokio::test]
async fn find_by_name_prefix_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for name in ["100%_Real", "100 Real", "1000x"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let names: Vec<String> = repo
        .find_by_name_prefix("100%_")
        .await?
        .into_iter()
        .map(|u| u.name)
        .collect();
    let any = repo.find_by_name_prefix("%").await?;

    assert_eq!(names, vec!["100%_Real".to_string()]);
    assert!(any.is_empty());

    Ok(())
}

/// Tests batch lookup by IDs.
///
/// Expected: Ok with existing users only
#[tokio::test]
async fn find_by_ids_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let ids: Vec<i32> = repo
        .find_by_ids(&[b.id, 999, a.id])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(ids, vec![a.id, b.id]);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests listing all users.
///
/// Expected: Ok with every user
#[tokio::test]
async fn find_all_returns_every_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}
