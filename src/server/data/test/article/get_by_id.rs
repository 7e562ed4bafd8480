use super::*;

/// Tests getting an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ArticleRepository::new(db).get_by_id(1).await?.is_none());

    Ok(())
}

/// Tests getting an article with comments and likes.
///
/// Verifies counts, comment authors and tags are assembled.
///
/// Expected: Ok(Some) with one like, two comments and the tag
#[tokio::test]
async fn includes_comments_and_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let article = ArticleRepository::new(db)
        .create(CreateArticleParams {
            id_user: author.id,
            title: "Patch notes".to_string(),
            content: "Everything changed".to_string(),
            tags: vec!["news".to_string()],
        })
        .await?
        .unwrap();
    factory::article::like_article(db, reader.id, article.id).await?;
    factory::create_article_comment(db, reader.id, article.id).await?;
    factory::create_article_comment(db, author.id, article.id).await?;

    let details = ArticleRepository::new(db)
        .get_by_id(article.id)
        .await?
        .unwrap();

    assert_eq!(details.article.title, "Patch notes");
    assert_eq!(details.article.likes, 1);
    assert_eq!(details.article.comments, 2);
    assert_eq!(details.article.tags[0].name, "news");
    assert_eq!(details.comments.len(), 2);
    assert_eq!(details.comments[0].nick, reader.nick);

    Ok(())
}
