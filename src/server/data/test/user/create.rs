use super::*;

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        hashed_password: "hash".to_string(),
        is_admin: false,
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with user created, not admin and without a picture
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("ada", "ada@example.com")).await?;

    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.hashed_password, "hash");
    assert!(!user.is_admin);
    assert_eq!(user.pp_url, None);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("ada", "ada@example.com")).await?;
    let result = repo.create(new_user("ada", "other@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
