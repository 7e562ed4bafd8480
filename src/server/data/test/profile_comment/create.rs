use super::*;

/// Tests leaving a comment on another user's profile.
///
/// Expected: Ok(Some) with the author's nick, listed on the owner's profile
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;

    let repo = ProfileCommentRepository::new(db);
    let comment = repo
        .create(author.id, owner.id, "Great profile".to_string())
        .await?
        .unwrap();

    assert_eq!(comment.id_user, author.id);
    assert_eq!(comment.id_user_comment, owner.id);
    assert_eq!(comment.nick, author.nick);
    assert!(comment.author_photo.is_none());

    let listed = repo.get_by_profile(owner.id).await?.unwrap();
    assert_eq!(listed, vec![comment]);

    Ok(())
}

/// Tests commenting on a profile that does not exist.
///
/// Expected: Ok(None) and no comment stored
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let result = ProfileCommentRepository::new(db)
        .create(author.id, 404, "Anyone there?".to_string())
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::ProfileComment::find().count(db).await?, 0);

    Ok(())
}
