use super::*;

/// Tests reading the messages of a group.
///
/// Verifies that messages come back oldest first with their author's nick,
/// whether or not the reader belongs to the group.
///
/// Expected: Ok(Some) with both messages in posting order
#[tokio::test]
async fn lists_messages_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    let first = factory::group::post_group_message(db, group.id, creator.id).await?;
    let second = factory::group::post_group_message(db, group.id, creator.id).await?;

    let messages = GroupMessageRepository::new(db)
        .get_by_group(group.id)
        .await?
        .unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, first.id);
    assert_eq!(messages[1].id, second.id);
    assert_eq!(messages[0].nick, creator.nick);

    Ok(())
}

/// Tests reading the messages of a missing group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupMessageRepository::new(db).get_by_group(999).await?;

    assert!(result.is_none());

    Ok(())
}
