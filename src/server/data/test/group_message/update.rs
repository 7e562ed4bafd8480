use super::*;

/// Tests the author editing their message.
///
/// Expected: Ok(Some) with the new content and the author's nick
#[tokio::test]
async fn author_edits_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    let message = factory::group::post_group_message(db, group.id, creator.id).await?;

    let updated = GroupMessageRepository::new(db)
        .update(
            message.id,
            "Raid moved to nine".to_string(),
            &Actor::new(creator.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.content, "Raid moved to nine");
    assert_eq!(updated.nick, creator.nick);

    Ok(())
}

/// Tests the group creator editing a member's message.
///
/// Verifies that owning the group does not grant editing rights.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_group_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    factory::add_group_member(db, group.id, member.id).await?;
    let message = factory::group::post_group_message(db, group.id, member.id).await?;

    let result = GroupMessageRepository::new(db)
        .update(
            message.id,
            "Rewritten".to_string(),
            &Actor::new(creator.id, Role::User),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Ok(None) for a message that does not exist
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = GroupMessageRepository::new(db)
        .update(404, "Nothing".to_string(), &Actor::new(admin.id, Role::Admin))
        .await?;

    assert!(result.is_none());

    Ok(())
}
