use super::*;

/// Tests the author editing their comment.
///
/// Expected: Ok(Some) with the new description and the author's nick
#[tokio::test]
async fn author_edits_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;
    let comment = factory::create_article_comment(db, user.id, article.id).await?;

    let updated = ArticleCommentRepository::new(db)
        .update(
            UpdateCommentParams {
                id: comment.id,
                id_user: user.id,
                id_parent: article.id,
                description: "Edited".to_string(),
            },
            &Actor::new(user.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "Edited");
    assert_eq!(updated.nick, user.nick);

    Ok(())
}

/// Tests a moderator editing someone else's comment.
///
/// Verifies that only the author or an admin may edit.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_moderator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;
    let comment = factory::create_article_comment(db, user.id, article.id).await?;

    let result = ArticleCommentRepository::new(db)
        .update(
            UpdateCommentParams {
                id: comment.id,
                id_user: user.id,
                id_parent: article.id,
                description: "Moderated".to_string(),
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
