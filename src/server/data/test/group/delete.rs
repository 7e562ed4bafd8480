use super::*;

/// Tests deleting a group with members and messages.
///
/// Expected: Ok(Some(())) and no memberships or messages left
#[tokio::test]
async fn removes_members_and_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    factory::add_group_member(db, group.id, member.id).await?;
    factory::group::post_group_message(db, group.id, member.id).await?;

    let result = GroupRepository::new(db)
        .delete(group.id, &Actor::new(creator.id, Role::User))
        .await?;

    assert!(result.is_some());
    assert_eq!(entity::prelude::Group::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GroupUser::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GroupUserMessage::find().count(db).await?, 0);

    Ok(())
}
