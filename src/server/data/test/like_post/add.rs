use super::*;

/// Tests liking and unliking a post.
///
/// Expected: Created, exists true, AlreadyExists, Removed, exists false
#[tokio::test]
async fn toggles_like() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = PostLikeRepository::new(db);
    assert_eq!(repo.add(user.id, post.id, &actor).await?, AddOutcome::Created);
    assert_eq!(repo.exists(user.id, post.id).await?, Some(true));
    assert_eq!(
        repo.add(user.id, post.id, &actor).await?,
        AddOutcome::AlreadyExists
    );
    assert_eq!(
        repo.remove(user.id, post.id, &actor).await?,
        RemoveOutcome::Removed
    );
    assert_eq!(repo.exists(user.id, post.id).await?, Some(false));

    Ok(())
}

/// Tests liking a post on behalf of another user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_liking_for_someone_else() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;

    let result = PostLikeRepository::new(db)
        .add(user.id, post.id, &Actor::new(other.id, Role::Moderator))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
