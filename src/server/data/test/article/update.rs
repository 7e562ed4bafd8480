use super::*;

/// Tests replacing title, content and tags of one's own article.
///
/// Expected: Ok(Some) with the new fields and only the new tag
#[tokio::test]
async fn replaces_title_content_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(CreateArticleParams {
            id_user: user.id,
            title: "Draft".to_string(),
            content: "Before".to_string(),
            tags: vec!["old".to_string()],
        })
        .await?
        .unwrap();

    let updated = repo
        .update(
            UpdateArticleParams {
                id: article.id,
                title: "Final".to_string(),
                content: "After".to_string(),
                tags: vec!["new".to_string()],
            },
            &Actor::new(user.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "After");
    let names: Vec<String> = updated.tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["new"]);

    Ok(())
}

/// Tests a moderator editing someone else's article.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_moderator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let result = ArticleRepository::new(db)
        .update(
            UpdateArticleParams {
                id: article.id,
                title: "Hijacked".to_string(),
                content: "Hijacked".to_string(),
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

/// Expected: Ok(None) for an article that does not exist
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = ArticleRepository::new(db)
        .update(
            UpdateArticleParams {
                id: 404,
                title: "None".to_string(),
                content: "None".to_string(),
                tags: vec![],
            },
            &Actor::new(admin.id, Role::Admin),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
