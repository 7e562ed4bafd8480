use super::*;

/// Tests the group creator deleting a member's message.
///
/// Expected: Ok(Some(())) and the message no longer listed
#[tokio::test]
async fn group_creator_deletes_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    factory::add_group_member(db, group.id, member.id).await?;
    let message = factory::group::post_group_message(db, group.id, member.id).await?;

    let repo = GroupMessageRepository::new(db);
    let result = repo
        .delete(message.id, &Actor::new(creator.id, Role::User))
        .await?;

    assert!(result.is_some());
    assert!(repo.get_by_group(group.id).await?.unwrap().is_empty());

    Ok(())
}

/// Tests another member deleting a message.
///
/// Expected: Err(AuthError::AccessDenied) and the message kept
#[tokio::test]
async fn denies_other_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    factory::add_group_member(db, group.id, member.id).await?;
    let message = factory::group::post_group_message(db, group.id, creator.id).await?;

    let repo = GroupMessageRepository::new(db);
    let result = repo
        .delete(message.id, &Actor::new(member.id, Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(repo.get_by_group(group.id).await?.unwrap().len(), 1);

    Ok(())
}

/// Tests a moderator outside the group deleting a message.
///
/// Expected: Ok(Some(()))
#[tokio::test]
async fn moderator_deletes_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    let message = factory::group::post_group_message(db, group.id, creator.id).await?;

    let result = GroupMessageRepository::new(db)
        .delete(message.id, &Actor::new(moderator.id, Role::Moderator))
        .await?;

    assert!(result.is_some());

    Ok(())
}
