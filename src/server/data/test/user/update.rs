use super::*;

/// Tests updating one's own profile.
///
/// Expected: Ok(Some) with the new nick and email
#[tokio::test]
async fn updates_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            UpdateUserParams {
                id: user.id,
                nick: "Renamed".to_string(),
                email: "renamed@example.com".to_string(),
                phone_number: Some("123456789".to_string()),
            },
            &Actor::new(user.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(updated.nick, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.phone_number.as_deref(), Some("123456789"));

    Ok(())
}

/// Tests taking the nick of another user.
///
/// Expected: Err(DomainError::SameName)
#[tokio::test]
async fn rejects_nick_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::user::UserFactory::new(db).nick("Taken").build().await?;

    let result = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: user.id,
                nick: other.nick.clone(),
                email: user.email.clone(),
                phone_number: None,
            },
            &Actor::new(user.id, Role::User),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::SameName(_)))
    ));

    Ok(())
}

/// Tests updating someone else's profile as a moderator.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let moderator = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: user.id,
                nick: "Renamed".to_string(),
                email: user.email.clone(),
                phone_number: None,
            },
            &Actor::new(moderator.id, Role::Moderator),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
