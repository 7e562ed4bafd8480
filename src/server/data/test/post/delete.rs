use super::*;

/// Tests a moderator deleting a post with likes, comments and reports.
///
/// Expected: Ok(Some(())) and every dependent row removed
#[tokio::test]
async fn removes_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_post_comment(db, moderator.id, post.id).await?;
    let reason = factory::create_reason(db).await?;
    factory::post::like_post(db, moderator.id, post.id).await?;

    entity::report_comment_post::ActiveModel {
        id_user: ActiveValue::Set(author.id),
        id_comment: ActiveValue::Set(comment.id),
        id_reason: ActiveValue::Set(reason.id),
        description: ActiveValue::Set("Spam".to_string()),
        reported_at: ActiveValue::Set(Utc::now()),
        viewed: ActiveValue::Set(false),
    }
    .insert(db)
    .await?;

    let result = PostRepository::new(db)
        .delete(post.id, &Actor::new(moderator.id, Role::Moderator))
        .await?;

    assert!(result.is_some());
    assert_eq!(entity::prelude::Post::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CommentPost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::LikePost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReportCommentPost::find().count(db).await?, 0);

    Ok(())
}

/// Tests a redactor deleting someone else's post.
///
/// Expected: Err(AuthError::AccessDenied) and the post kept
#[tokio::test]
async fn denies_redactor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let redactor = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let result = PostRepository::new(db)
        .delete(post.id, &Actor::new(redactor.id, Role::Redactor))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Post::find().count(db).await?, 1);

    Ok(())
}
