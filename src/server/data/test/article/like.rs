use super::*;

/// Tests the full like cycle on an article.
///
/// Verifies that a like is recorded once, that a repeated like reports the
/// existing relation, and that removal clears it.
///
/// Expected: Created, AlreadyExists, Removed, then exists is false
#[tokio::test]
async fn toggles_like() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = ArticleLikeRepository::new(db);
    assert_eq!(repo.add(user.id, article.id, &actor).await?, AddOutcome::Created);
    assert_eq!(repo.exists(user.id, article.id).await?, Some(true));
    assert_eq!(
        repo.add(user.id, article.id, &actor).await?,
        AddOutcome::AlreadyExists
    );
    assert_eq!(
        repo.remove(user.id, article.id, &actor).await?,
        RemoveOutcome::Removed
    );
    assert_eq!(repo.exists(user.id, article.id).await?, Some(false));
    assert_eq!(
        repo.remove(user.id, article.id, &actor).await?,
        RemoveOutcome::Absent
    );

    Ok(())
}

/// Tests liking an article that does not exist.
///
/// Expected: NotFound, and exists answers None
#[tokio::test]
async fn reports_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let actor = Actor::new(user.id, Role::User);

    let repo = ArticleLikeRepository::new(db);
    assert_eq!(repo.add(user.id, 77, &actor).await?, AddOutcome::NotFound);
    assert_eq!(repo.exists(user.id, 77).await?, None);

    Ok(())
}
