use super::*;

/// Tests deleting a user who authored content across several families.
///
/// Verifies that posts, comments, likes, profile comments, friendships and
/// group memberships referencing the user are removed with them, while other
/// users' content stays.
///
/// Expected: Ok(Some(())) and no rows left referencing the user
#[tokio::test]
async fn removes_dependent_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let own_post = factory::create_post(db, user.id).await?;
    let other_post = factory::create_post(db, other.id).await?;
    factory::create_post_comment(db, other.id, own_post.id).await?;
    factory::create_post_comment(db, user.id, other_post.id).await?;
    factory::post::like_post(db, user.id, other_post.id).await?;
    factory::create_profile_comment(db, other.id, user.id).await?;
    let group = factory::create_group(db, other.id).await?;
    factory::add_group_member(db, group.id, user.id).await?;

    let result = UserRepository::new(db)
        .delete(user.id, &Actor::new(user.id, Role::User))
        .await?;

    assert!(result.is_some());
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::Post::find().count(db).await?, 1);
    assert_eq!(entity::prelude::CommentPost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::LikePost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ProfileComment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GroupUser::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .delete(999, &Actor::new(1, Role::Admin))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting another user without the admin role.
///
/// Expected: Err(AuthError::AccessDenied) and the user kept
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .delete(user.id, &Actor::new(other.id, Role::Moderator))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_some());

    Ok(())
}
