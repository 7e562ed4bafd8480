use super::*;

/// Tests blocking a friend.
///
/// Verifies that the block is listed with its comment and that the friendship
/// between the two users ends.
///
/// Expected: Created, one blocked entry, no friends left
#[tokio::test]
async fn ends_friendship() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let actor = Actor::new(user.id, Role::User);

    FriendRepository::new(db)
        .add(user.id, other.id, &actor)
        .await?;

    let repo = BlockedUserRepository::new(db);
    let outcome = repo
        .block(user.id, other.id, Some("Spammer".to_string()), &actor)
        .await?;

    assert_eq!(outcome, AddOutcome::Created);
    let blocked = repo.get_blocked(user.id).await?.unwrap();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].user.id, other.id);
    assert_eq!(blocked[0].comment.as_deref(), Some("Spammer"));
    assert!(FriendRepository::new(db)
        .get_friends(other.id)
        .await?
        .unwrap()
        .is_empty());

    Ok(())
}

/// Tests blocking oneself.
///
/// Expected: Err(DomainError::UserCreator)
#[tokio::test]
async fn rejects_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BlockedUserRepository::new(db)
        .block(user.id, user.id, None, &Actor::new(user.id, Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserCreator(_)))
    ));

    Ok(())
}

/// Expected: Removed on first unblock, Absent on the second
#[tokio::test]
async fn unblocks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = BlockedUserRepository::new(db);
    repo.block(user.id, other.id, None, &actor).await?;

    assert_eq!(
        repo.unblock(user.id, other.id, &actor).await?,
        RemoveOutcome::Removed
    );
    assert_eq!(
        repo.unblock(user.id, other.id, &actor).await?,
        RemoveOutcome::Absent
    );

    Ok(())
}
