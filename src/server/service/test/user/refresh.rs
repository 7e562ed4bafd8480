use super::*;

/// Tests exchanging a refresh token.
///
/// Verifies that the token is rotated, so the old one is rejected afterwards.
///
/// Expected: Ok with a new refresh token, then InvalidRefreshToken for the old one
#[tokio::test]
async fn rotates_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db).await?;
    let tokens = tokens();
    let service = UserService::new(db, &tokens);
    service.register(registration("Nick1", "secret1")).await?;
    let first = service.login("Nick1", "secret1").await?;

    let second = service.refresh(&first.refresh_token).await?;

    assert_eq!(second.id_user, first.id_user);
    assert_ne!(second.refresh_token, first.refresh_token);
    assert!(matches!(
        service.refresh(&first.refresh_token).await,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}

/// Tests an expired refresh token.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db).await?;
    let expired = TokenService::new("service-test-secret", 900, -60);
    let service = UserService::new(db, &expired);
    service.register(registration("Nick1", "secret1")).await?;
    let issued = service.login("Nick1", "secret1").await?;

    assert!(matches!(
        service.refresh(&issued.refresh_token).await,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}
