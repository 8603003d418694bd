use axum::body::Bytes;

use super::*;
use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
    service::{auth::password::verify_password, content::ContentService, user::UserService},
    storage::FileStore,
    util::multipart::UploadedFile,
};

fn create_params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        is_admin: false,
    }
}

fn update_params(id: i32) -> UpdateUserParams {
    UpdateUserParams {
        id,
        username: None,
        name: None,
        email: None,
        password: None,
        picture: None,
    }
}

/// Tests creating a user.
///
/// Verifies the password is stored as a verifiable hash, not in plain text.
///
/// Expected: Ok with hashed password
#[tokio::test]
async fn create_hashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let service = UserService::new(db, &cache, &files);

    let user = service.create(create_params("ada", "ada@example.com")).await?;

    assert_ne!(user.hashed_password, "correct horse");
    assert!(verify_password("correct horse", &user.hashed_password));

    Ok(())
}

/// Tests that usernames and emails must be unique.
///
/// Expected: Err(BadRequest) for each clash
#[tokio::test]
async fn create_rejects_taken_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    factory::user::UserFactory::new(db)
        .username("ada")
        .email("ada@example.com")
        .build()
        .await?;

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let service = UserService::new(db, &cache, &files);

    let same_username = service.create(create_params("ada", "other@example.com")).await;
    let same_email = service.create(create_params("other", "ada@example.com")).await;

    assert!(matches!(same_username, Err(AppError::BadRequest(ref m)) if m == "Username already taken"));
    assert!(matches!(same_email, Err(AppError::BadRequest(ref m)) if m == "Email already registered"));

    Ok(())
}

/// Tests that updating a user may keep their own username.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn update_allows_own_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let user = factory::user::UserFactory::new(db).username("ada").build().await?;

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let service = UserService::new(db, &cache, &files);

    let updated = service
        .update(UpdateUserParams {
            username: Some("ada".to_string()),
            name: Some("Countess".to_string()),
            ..update_params(user.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "ada");
    assert_eq!(updated.name, "Countess");

    Ok(())
}

/// Tests replacing a profile picture.
///
/// Expected: new picture stored, previous picture removed
#[tokio::test]
async fn update_replaces_picture() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let user = factory::create_user(db).await?;

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let service = UserService::new(db, &cache, &files);

    let picture = |bytes: &'static [u8]| UploadedFile {
        file_name: Some("me.png".to_string()),
        bytes: Bytes::from_static(bytes),
    };

    let first = service
        .update(UpdateUserParams {
            picture: Some(picture(b"first")),
            ..update_params(user.id)
        })
        .await?
        .unwrap();
    let second = service
        .update(UpdateUserParams {
            picture: Some(picture(b"second")),
            ..update_params(user.id)
        })
        .await?
        .unwrap();

    let first_path = first.pp_url.unwrap();
    let second_path = second.pp_url.unwrap();
    assert_ne!(first_path, second_path);
    assert!(!files.resolve(&first_path).unwrap().exists());
    assert!(files.resolve(&second_path).unwrap().exists());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_user_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let service = UserService::new(db, &cache, &files);

    let result = service
        .update(UpdateUserParams {
            name: Some("Ghost".to_string()),
            ..update_params(999)
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting a user who owns content with files.
///
/// Expected: user and content gone, files removed, content list invalidated
#[tokio::test]
async fn delete_removes_content_files_and_invalidates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let user = factory::create_user(db).await?;

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let notifier = RecordingNotifier::default();
    let contents = ContentService::new(db, &cache, &files, &notifier);
    let content = contents
        .create(crate::server::model::content::CreateContentParams {
            creator_id: user.id,
            title: "Pilot".to_string(),
            description: String::new(),
            visibility: true,
            tags: Default::default(),
            uploads: crate::server::model::content::ContentUploads {
                content_file: Some(UploadedFile {
                    file_name: Some("pilot.mp4".to_string()),
                    bytes: Bytes::from_static(b"video"),
                }),
                thumbnail_file: None,
            },
        })
        .await?;
    contents.get_all().await?;

    let service = UserService::new(db, &cache, &files);
    assert!(service.delete(user.id).await?);

    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert!(contents.get_by_id(content.id).await?.is_none());
    assert!(cache.get(keys::ALL_CONTENT).await?.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    Ok(())
}

/// Tests resolving subscriber ids to emails.
///
/// Ids with no local user are skipped.
///
/// Expected: the emails of the existing subscribers only
#[tokio::test]
async fn subscriber_emails_skip_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let creator = factory::create_user(db).await?;
    let fan = factory::user::UserFactory::new(db)
        .email("fan@example.com")
        .build()
        .await?;

    let cache = MemoryCache::new();
    let files = FileStore::new(dir.path());
    let notifier = RecordingNotifier::with_subscribers(vec![fan.id, 999]);
    let service = UserService::new(db, &cache, &files);

    let emails = service.subscriber_emails(creator.id, &notifier).await?;

    assert_eq!(emails, vec!["fan@example.com".to_string()]);

    Ok(())
}
