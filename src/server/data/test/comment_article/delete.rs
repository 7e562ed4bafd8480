use super::*;

/// Tests the author of an article deleting a comment written by someone else.
///
/// Expected: Ok(Some(())) and the comment gone
#[tokio::test]
async fn article_author_deletes_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;
    let comment = factory::create_article_comment(db, commenter.id, article.id).await?;

    let repo = ArticleCommentRepository::new(db);
    let result = repo
        .delete(comment.id, &Actor::new(author.id, Role::User))
        .await?;

    assert!(result.is_some());
    assert!(repo.get_by_article(article.id).await?.unwrap().is_empty());

    Ok(())
}

/// Tests an unrelated user deleting a comment.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;
    let comment = factory::create_article_comment(db, author.id, article.id).await?;

    let result = ArticleCommentRepository::new(db)
        .delete(comment.id, &Actor::new(stranger.id, Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Ok(None) for a comment that does not exist
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ArticleCommentRepository::new(db)
        .delete(404, &Actor::new(user.id, Role::Admin))
        .await?;

    assert!(result.is_none());

    Ok(())
}
