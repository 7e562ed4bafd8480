use super::*;

/// Tests the author removing one of two tags from their post.
///
/// Expected: Ok(Some(())) and only the other tag left; the tag itself is kept
#[tokio::test]
async fn removes_one_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            id_user: user.id,
            content: "Tagged".to_string(),
            tags: vec!["alpha".to_string(), "beta".to_string()],
        })
        .await?
        .unwrap();
    let alpha = post.tags.iter().find(|t| t.name == "alpha").unwrap().id;

    let result = repo
        .remove_tag(post.id, alpha, &Actor::new(user.id, Role::User))
        .await?;

    assert!(result.is_some());
    let details = repo.get_by_id(post.id).await?.unwrap();
    let names: Vec<String> = details.post.tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["beta"]);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests removing a tag the post does not carry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;

    let result = PostRepository::new(db)
        .remove_tag(post.id, 404, &Actor::new(user.id, Role::User))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests another user removing a tag from a post.
///
/// Expected: Err(AuthError::AccessDenied) and the tag still linked
#[tokio::test]
async fn denies_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            id_user: author.id,
            content: "Mine".to_string(),
            tags: vec!["keep".to_string()],
        })
        .await?
        .unwrap();

    let result = repo
        .remove_tag(post.id, post.tags[0].id, &Actor::new(stranger.id, Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::PostTag::find().count(db).await?, 1);

    Ok(())
}
