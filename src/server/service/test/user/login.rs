use super::*;
use sea_orm::EntityTrait;

/// Tests logging in with the registered password.
///
/// Verifies that the issued access token carries the user id and that the
/// password is not stored in plain text.
///
/// Expected: Ok with a decodable token and a refresh token
#[tokio::test]
async fn issues_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rank::create_named_rank(db, "User", 1).await?;
    let tokens = tokens();
    let service = UserService::new(db, &tokens);

    let user = service
        .register(registration("Nick1", "secret1"))
        .await?
        .unwrap();
    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "secret1");

    let issued = service.login("Nick1", "secret1").await?;

    assert_eq!(issued.id_user, user.id);
    assert_eq!(issued.rank_name, "User");
    assert_eq!(tokens.decode(&issued.token)?.sub, user.id);
    assert!(!issued.refresh_token.is_empty());

    Ok(())
}

/// Tests logging in with a wrong password or unknown nick.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db).await?;
    let tokens = tokens();
    let service = UserService::new(db, &tokens);
    service.register(registration("Nick1", "secret1")).await?;

    assert!(matches!(
        service.login("Nick1", "wrong-pass").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("Nobody", "secret1").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests a factory user logs in with the factory's default password.
///
/// Expected: Ok for the default password, Err(AuthError::InvalidCredentials) otherwise
#[tokio::test]
async fn accepts_factory_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = tokens();
    let service = UserService::new(db, &tokens);

    let issued = service
        .login(&user.nick, factory::user::DEFAULT_PASSWORD)
        .await?;
    assert_eq!(issued.id_user, user.id);

    assert!(matches!(
        service.login(&user.nick, "wrong-pass").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in when the stored hash cannot be parsed.
///
/// Expected: Err(AuthError::InvalidCredentials), not an internal error
#[tokio::test]
async fn treats_unreadable_hash_as_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password("not-a-hash")
        .build()
        .await?;
    let tokens = tokens();
    let service = UserService::new(db, &tokens);

    assert!(matches!(
        service.login(&user.nick, "not-a-hash").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
