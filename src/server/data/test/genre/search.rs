use super::*;

/// Tests substring search and full listing order.
///
/// Expected: Ok with matches for the term and all genres sorted by name
#[tokio::test]
async fn searches_and_lists_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for name in ["Science Fiction", "Fiction", "Comedy"] {
        factory::genre::create_genre_named(db, name).await?;
    }

    let repo = GenreRepository::new(db);
    let matches: Vec<String> = repo
        .search_by_name("Fiction")
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    let all: Vec<String> = repo.find_all().await?.into_iter().map(|g| g.name).collect();

    assert_eq!(matches, vec!["Fiction".to_string(), "Science Fiction".to_string()]);
    assert_eq!(
        all,
        vec!["Comedy".to_string(), "Fiction".to_string(), "Science Fiction".to_string()]
    );

    Ok(())
}

/// Tests genre search with an underscore in the term.
///
/// Expected: only the genre whose name contains a literal underscore
#[tokio::test]
async fn search_treats_underscore_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tag_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for name in ["Sci_Fi", "SciXFi"] {
        factory::genre::create_genre_named(db, name).await?;
    }

    let names: Vec<String> = GenreRepository::new(db)
        .search_by_name("i_F")
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();

    assert_eq!(names, vec!["Sci_Fi".to_string()]);

    Ok(())
}
