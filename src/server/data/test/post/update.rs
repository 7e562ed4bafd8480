use super::*;

/// Tests replacing content and tags of one's own post.
///
/// Expected: Ok(Some) with the new content and only the new tag
#[tokio::test]
async fn replaces_content_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            id_user: user.id,
            content: "Before".to_string(),
            tags: vec!["old".to_string()],
        })
        .await?
        .unwrap();

    let updated = repo
        .update(
            UpdatePostParams {
                id: post.id,
                content: "After".to_string(),
                tags: vec!["new".to_string()],
            },
            &Actor::new(user.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.content, "After");
    let names: Vec<String> = updated.tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["new"]);

    Ok(())
}

/// Tests a moderator editing someone else's post.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_moderator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let result = PostRepository::new(db)
        .update(
            UpdatePostParams {
                id: post.id,
                content: "Edited".to_string(),
                tags: vec![],
            },
            &Actor::new(moderator.id, Role::Moderator),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
