use super::*;

/// Tests commenting on an article.
///
/// Expected: Ok(Some) carrying the author's nick, listed under the article
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let repo = ArticleCommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            id_user: commenter.id,
            id_parent: article.id,
            description: "Good read".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(comment.nick, commenter.nick);
    assert_eq!(comment.id_article, article.id);

    let listed = repo.get_by_article(article.id).await?.unwrap();
    assert_eq!(listed, vec![comment]);

    Ok(())
}

/// Tests commenting as a user that does not exist.
///
/// Expected: Ok(None) and no comment stored
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let repo = ArticleCommentRepository::new(db);
    let result = repo
        .create(CreateCommentParams {
            id_user: 404,
            id_parent: article.id,
            description: "Ghost".to_string(),
        })
        .await?;

    assert!(result.is_none());
    assert!(repo.get_by_article(article.id).await?.unwrap().is_empty());

    Ok(())
}

/// Tests listing comments of an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ArticleCommentRepository::new(db)
        .get_by_article(404)
        .await?
        .is_none());

    Ok(())
}
