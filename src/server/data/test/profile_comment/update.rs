use super::*;

/// Tests the author editing their profile comment.
///
/// Expected: Ok(Some) with the new description
#[tokio::test]
async fn author_edits_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let comment = factory::create_profile_comment(db, author.id, owner.id).await?;

    let updated = ProfileCommentRepository::new(db)
        .update(
            comment.id,
            "Edited".to_string(),
            &Actor::new(author.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "Edited");
    assert_eq!(updated.nick, author.nick);

    Ok(())
}

/// Tests the profile owner editing a comment someone left on their profile.
///
/// Verifies that the owner may delete but not rewrite the comment.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_profile_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let comment = factory::create_profile_comment(db, author.id, owner.id).await?;

    let result = ProfileCommentRepository::new(db)
        .update(
            comment.id,
            "Rewritten".to_string(),
            &Actor::new(owner.id, Role::User),
        )
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
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = ProfileCommentRepository::new(db)
        .update(404, "Nothing".to_string(), &Actor::new(admin.id, Role::Admin))
        .await?;

    assert!(result.is_none());

    Ok(())
}
