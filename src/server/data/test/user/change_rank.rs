use super::*;

/// Tests moving a user to another rank.
///
/// Expected: Ok(Some) with the new rank name
#[tokio::test]
async fn changes_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let moderator = factory::rank::create_named_rank(db, "Moderator", 5).await?;

    let updated = UserRepository::new(db)
        .change_rank(user.id, moderator.id)
        .await?
        .unwrap();

    assert_eq!(updated.id_rank, moderator.id);
    assert_eq!(updated.rank_name, "Moderator");

    Ok(())
}

/// Tests assigning a rank that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserRepository::new(db).change_rank(user.id, 999).await?;

    assert!(result.is_none());

    Ok(())
}
