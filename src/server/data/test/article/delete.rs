use super::*;

/// Tests a moderator deleting an article with likes, tags, comments and reports.
///
/// Expected: Ok(Some(())) and every dependent row removed
#[tokio::test]
async fn removes_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let article = ArticleRepository::new(db)
        .create(CreateArticleParams {
            id_user: author.id,
            title: "Doomed".to_string(),
            content: "Soon gone".to_string(),
            tags: vec!["temp".to_string()],
        })
        .await?
        .unwrap();
    let comment = factory::create_article_comment(db, moderator.id, article.id).await?;
    let reason = factory::create_reason(db).await?;
    factory::article::like_article(db, moderator.id, article.id).await?;

    entity::report_comment_article::ActiveModel {
        id_user: ActiveValue::Set(author.id),
        id_comment: ActiveValue::Set(comment.id),
        id_reason: ActiveValue::Set(reason.id),
        description: ActiveValue::Set("Spam".to_string()),
        reported_at: ActiveValue::Set(Utc::now()),
        viewed: ActiveValue::Set(false),
    }
    .insert(db)
    .await?;

    let result = ArticleRepository::new(db)
        .delete(article.id, &Actor::new(moderator.id, Role::Moderator))
        .await?;

    assert!(result.is_some());
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ArticleTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CommentArticle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::LikeArticle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReportCommentArticle::find().count(db).await?, 0);

    Ok(())
}

/// Tests a redactor deleting someone else's article.
///
/// Expected: Err(AuthError::AccessDenied) and the article kept
#[tokio::test]
async fn denies_redactor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let redactor = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let result = ArticleRepository::new(db)
        .delete(article.id, &Actor::new(redactor.id, Role::Redactor))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);

    Ok(())
}
