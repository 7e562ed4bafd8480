use super::*;

/// Tests the author of a post deleting a comment written by someone else.
///
/// Expected: Ok(Some(()))
#[tokio::test]
async fn post_author_deletes_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_post_comment(db, commenter.id, post.id).await?;

    let repo = PostCommentRepository::new(db);
    let result = repo
        .delete(comment.id, &Actor::new(author.id, Role::User))
        .await?;

    assert!(result.is_some());
    assert!(repo.get_by_post(post.id).await?.unwrap().is_empty());

    Ok(())
}

/// Tests an unrelated user deleting a comment.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_post_comment(db, author.id, post.id).await?;

    let result = PostCommentRepository::new(db)
        .delete(comment.id, &Actor::new(stranger.id, Role::Redactor))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
