use super::*;

/// Tests creating an article with tags.
///
/// Expected: Ok(Some) with the author's nick, no likes or comments and the tags by name
#[tokio::test]
async fn creates_article_with_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let article = ArticleRepository::new(db)
        .create(CreateArticleParams {
            id_user: user.id,
            title: "Release notes".to_string(),
            content: "What changed".to_string(),
            tags: vec!["release".to_string(), "changelog".to_string()],
        })
        .await?
        .unwrap();

    assert_eq!(article.nick, user.nick);
    assert_eq!(article.title, "Release notes");
    assert_eq!((article.likes, article.comments), (0, 0));
    assert!(!article.highlight);
    let names: Vec<String> = article.tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["changelog", "release"]);

    Ok(())
}

/// Tests creating an article for an author that does not exist.
///
/// Expected: Ok(None) and no article or tag stored
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db)
        .create(CreateArticleParams {
            id_user: 999,
            title: "Orphan".to_string(),
            content: "Nobody wrote this".to_string(),
            tags: vec!["lost".to_string()],
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 0);

    Ok(())
}
