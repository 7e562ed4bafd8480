use super::*;

/// Tests editing a comment with a parent id that does not match.
///
/// Expected: Ok(None) and the description unchanged
#[tokio::test]
async fn requires_matching_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;
    let other_post = factory::create_post(db, user.id).await?;
    let comment = factory::create_post_comment(db, user.id, post.id).await?;

    let repo = PostCommentRepository::new(db);
    let result = repo
        .update(
            UpdateCommentParams {
                id: comment.id,
                id_user: user.id,
                id_parent: other_post.id,
                description: "Moved".to_string(),
            },
            &Actor::new(user.id, Role::User),
        )
        .await?;

    assert!(result.is_none());
    let listed = repo.get_by_post(post.id).await?.unwrap();
    assert_eq!(listed[0].description, comment.description);

    Ok(())
}

/// Tests an admin editing someone else's comment.
///
/// Expected: Ok(Some) with the new description
#[tokio::test]
async fn admin_edits_any_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;
    let comment = factory::create_post_comment(db, user.id, post.id).await?;

    let updated = PostCommentRepository::new(db)
        .update(
            UpdateCommentParams {
                id: comment.id,
                id_user: user.id,
                id_parent: post.id,
                description: "Moderated".to_string(),
            },
            &Actor::new(admin.id, Role::Admin),
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "Moderated");

    Ok(())
}
