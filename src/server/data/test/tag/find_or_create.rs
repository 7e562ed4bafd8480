use super::*;

/// Tests looking up a tag name twice.
///
/// Expected: the same row both times and one tag stored
#[tokio::test]
async fn reuses_existing_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = tag::find_or_create(db, "rust").await?;
    let second = tag::find_or_create(db, "rust").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating an article whose tag list repeats a name with extra spaces.
///
/// Verifies that the repeated names link the tag once, since the article/tag key
/// would reject a second link.
///
/// Expected: Ok(Some) with a single tag
#[tokio::test]
async fn links_repeated_name_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let article = ArticleRepository::new(db)
        .create(CreateArticleParams {
            id_user: user.id,
            title: "Tags".to_string(),
            content: "Body".to_string(),
            tags: vec!["news".to_string(), " news".to_string(), "news ".to_string()],
        })
        .await?
        .unwrap();

    let names: Vec<String> = article.tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["news"]);
    assert_eq!(entity::prelude::ArticleTag::find().count(db).await?, 1);

    Ok(())
}
