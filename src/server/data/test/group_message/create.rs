use super::*;

/// Tests a member posting to a group.
///
/// Expected: Ok(Some) with the author's nick
#[tokio::test]
async fn member_posts_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;

    let message = GroupMessageRepository::new(db)
        .create(
            group.id,
            creator.id,
            "Raid at eight".to_string(),
            &Actor::new(creator.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(message.nick, creator.nick);
    assert_eq!(message.content, "Raid at eight");

    Ok(())
}

/// Tests a non-member posting to a group.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;

    let result = GroupMessageRepository::new(db)
        .create(
            group.id,
            outsider.id,
            "Let me in".to_string(),
            &Actor::new(outsider.id, Role::User),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
