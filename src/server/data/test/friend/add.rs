use super::*;

/// Tests adding a friend.
///
/// Verifies that the friendship is visible from both sides.
///
/// Expected: Created, then AlreadyExists on repeat
#[tokio::test]
async fn stores_both_directions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = FriendRepository::new(db);
    assert_eq!(repo.add(user.id, friend.id, &actor).await?, AddOutcome::Created);
    assert_eq!(
        repo.add(user.id, friend.id, &actor).await?,
        AddOutcome::AlreadyExists
    );

    let of_user = repo.get_friends(user.id).await?.unwrap();
    let of_friend = repo.get_friends(friend.id).await?.unwrap();
    assert_eq!(of_user.len(), 1);
    assert_eq!(of_user[0].nick, friend.nick);
    assert_eq!(of_friend[0].id, user.id);

    Ok(())
}

/// Tests befriending oneself.
///
/// Expected: Err(DomainError::UserCreator)
#[tokio::test]
async fn rejects_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FriendRepository::new(db)
        .add(user.id, user.id, &Actor::new(user.id, Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserCreator(_)))
    ));

    Ok(())
}

/// Expected: NotFound when the other user does not exist
#[tokio::test]
async fn reports_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let outcome = FriendRepository::new(db)
        .add(user.id, 500, &Actor::new(user.id, Role::User))
        .await?;

    assert_eq!(outcome, AddOutcome::NotFound);

    Ok(())
}
