use super::*;

/// Tests a member endpoint accepts a plain user.
///
/// Verifies that the guard decodes the bearer token, finds the user, and maps
/// their rank onto the `User` role.
///
/// Expected: Ok(Actor) with the user's id and role
#[tokio::test]
async fn grants_member_access_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let headers = bearer(&tokens.issue(user.id, Role::User)?);

    let actor = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    assert_eq!(actor.id, user.id);
    assert_eq!(actor.role, Role::User);

    Ok(())
}

/// Tests the role comes from the current rank rather than the token.
///
/// Verifies that a user promoted to Admin after the token was issued passes an
/// admin check with the old token.
///
/// Expected: Ok(Actor) with role Admin
#[tokio::test]
async fn reads_role_from_current_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin_rank = factory::rank::create_named_rank(db, "Admin", 4).await?;
    let user = factory::user::create_user_with_rank(db, admin_rank.id).await?;
    let headers = bearer(&tokens.issue(user.id, Role::User)?);

    let actor = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(actor.role, Role::Admin);

    Ok(())
}

/// Tests a blocked user is denied member endpoints.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_access_to_blocked_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let blocked = factory::rank::create_named_rank(db, "Blocked", 0).await?;
    let user = factory::user::create_user_with_rank(db, blocked.id).await?;
    let headers = bearer(&tokens.issue(user.id, Role::Blocked)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Member])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests an empty permission list accepts any authenticated user.
///
/// Expected: Ok(Actor) with role Blocked
#[tokio::test]
async fn empty_permissions_accept_blocked_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let blocked = factory::rank::create_named_rank(db, "Blocked", 0).await?;
    let user = factory::user::create_user_with_rank(db, blocked.id).await?;
    let headers = bearer(&tokens.issue(user.id, Role::Blocked)?);

    let actor = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(actor.role, Role::Blocked);

    Ok(())
}

/// Tests staff and redaction permissions select the right roles.
///
/// Expected: Moderator passes Staff but not Redaction
#[tokio::test]
async fn staff_and_redaction_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let moderator = factory::rank::create_named_rank(db, "Moderator", 3).await?;
    let user = factory::user::create_user_with_rank(db, moderator.id).await?;
    let headers = bearer(&tokens.issue(user.id, Role::Moderator)?);
    let guard = AuthGuard::new(db, &tokens, &headers);

    assert!(guard.require(&[Permission::Staff]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Redaction]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a garbage token is rejected before any database access.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer("not.a.jwt");

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer(&tokens.issue(999, Role::Admin)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
