use super::*;

/// Tests creating a post with repeated and blank tag names.
///
/// Verifies that tags are trimmed, deduplicated and created on demand, and that
/// an existing tag is reused instead of duplicated.
///
/// Expected: Ok(Some) with two tags and two tag rows in total
#[tokio::test]
async fn creates_tags_on_demand() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    repo.create(CreatePostParams {
        id_user: user.id,
        content: "First".to_string(),
        tags: vec!["rust".to_string()],
    })
    .await?;

    let post = repo
        .create(CreatePostParams {
            id_user: user.id,
            content: "Second".to_string(),
            tags: vec![
                " rust ".to_string(),
                "games".to_string(),
                "rust".to_string(),
                "   ".to_string(),
            ],
        })
        .await?
        .unwrap();

    let mut names: Vec<String> = post.tags.into_iter().map(|t| t.name).collect();
    names.sort();
    assert_eq!(names, vec!["games", "rust"]);
    assert_eq!(post.nick, user.nick);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a post for an author that does not exist.
///
/// Expected: Ok(None) and no post stored
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db)
        .create(CreatePostParams {
            id_user: 999,
            content: "Orphan".to_string(),
            tags: vec![],
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Post::find().count(db).await?, 0);

    Ok(())
}
