use super::*;

/// Tests removing a friend from the other side.
///
/// Expected: Removed, and neither user lists the other afterwards
#[tokio::test]
async fn removes_both_directions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;

    let repo = FriendRepository::new(db);
    repo.add(user.id, friend.id, &Actor::new(user.id, Role::User))
        .await?;

    let outcome = repo
        .remove(friend.id, user.id, &Actor::new(friend.id, Role::User))
        .await?;

    assert_eq!(outcome, RemoveOutcome::Removed);
    assert!(repo.get_friends(user.id).await?.unwrap().is_empty());
    assert!(repo.get_friends(friend.id).await?.unwrap().is_empty());

    Ok(())
}

/// Tests removing one friendship keeps the user's other friendships.
///
/// Expected: Removed, and the third user is still listed as a friend
#[tokio::test]
async fn keeps_other_friendships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = FriendRepository::new(db);
    repo.add(user.id, friend.id, &actor).await?;
    repo.add(user.id, other.id, &actor).await?;

    let outcome = repo.remove(user.id, friend.id, &actor).await?;

    assert_eq!(outcome, RemoveOutcome::Removed);
    let friends = repo.get_friends(user.id).await?.unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, other.id);
    assert_eq!(repo.get_friends(other.id).await?.unwrap().len(), 1);

    Ok(())
}
