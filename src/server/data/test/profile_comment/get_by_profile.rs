use super::*;

/// Tests listing the comments on a profile.
///
/// Verifies that only comments on the requested profile are returned, newest
/// first, with the author's nick.
///
/// Expected: Ok(Some) with the two comments in reverse creation order
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let visitor = factory::create_user(db).await?;
    let now = Utc::now();

    let older = factory::profile_comment::create_profile_comment_at(
        db,
        visitor.id,
        owner.id,
        now - Duration::days(1),
    )
    .await?;
    let newer =
        factory::profile_comment::create_profile_comment_at(db, visitor.id, owner.id, now).await?;
    factory::create_profile_comment(db, owner.id, visitor.id).await?;

    let comments = ProfileCommentRepository::new(db)
        .get_by_profile(owner.id)
        .await?
        .unwrap();

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(comments[0].nick, visitor.nick);
    assert!(comments[0].author_photo.is_none());

    Ok(())
}

/// Expected: Ok(None) for a profile that does not exist
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ProfileCommentRepository::new(db)
        .get_by_profile(12)
        .await?
        .is_none());

    Ok(())
}
