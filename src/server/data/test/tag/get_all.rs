use super::*;

/// Tests listing tags created by posts and articles.
///
/// Expected: every tag once, ordered by name
#[tokio::test]
async fn lists_tags_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    tag::find_or_create(db, "zebra").await?;
    tag::find_or_create(db, "apple").await?;
    tag::find_or_create(db, "mango").await?;

    let names: Vec<String> = TagRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["apple", "mango", "zebra"]);

    Ok(())
}

/// Expected: an empty list without tags
#[tokio::test]
async fn returns_empty_without_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(TagRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
