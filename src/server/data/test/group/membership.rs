use super::*;

/// Tests joining and leaving a group.
///
/// Expected: Created, AlreadyExists, Removed, then not a member
#[tokio::test]
async fn joins_and_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = GroupRepository::new(db);
    assert_eq!(repo.join(group.id, user.id, &actor).await?, AddOutcome::Created);
    assert_eq!(
        repo.join(group.id, user.id, &actor).await?,
        AddOutcome::AlreadyExists
    );
    assert_eq!(
        repo.leave(group.id, user.id, &actor).await?,
        RemoveOutcome::Removed
    );
    assert_eq!(repo.is_member(group.id, user.id).await?, Some(false));

    Ok(())
}

/// Tests the creator leaving their own group.
///
/// Expected: Err(DomainError::UserCreator)
#[tokio::test]
async fn creator_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;

    let result = GroupRepository::new(db)
        .leave(group.id, creator.id, &Actor::new(creator.id, Role::User))
        .await;

    match result {
        Err(AppError::DomainErr(DomainError::UserCreator(msg))) => {
            assert_eq!(msg, "Group creator cannot leave the group!")
        }
        other => panic!("Expected UserCreator, got: {:?}", other),
    }

    Ok(())
}

/// Tests the creator removing a member.
///
/// Expected: Removed
#[tokio::test]
async fn creator_removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, creator.id).await?;
    factory::add_group_member(db, group.id, member.id).await?;

    let outcome = GroupRepository::new(db)
        .leave(group.id, member.id, &Actor::new(creator.id, Role::User))
        .await?;

    assert_eq!(outcome, RemoveOutcome::Removed);

    Ok(())
}
