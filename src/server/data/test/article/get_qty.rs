use super::*;

/// Tests requesting fewer articles than the minimum on an empty database.
///
/// Expected: Err(DomainError::WrongNumber)
#[tokio::test]
async fn rejects_quantity_below_floor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db).get_qty(3).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::WrongNumber(_)))
    ));

    Ok(())
}

/// Expected: all articles and no next page when fewer than `qty` exist
#[tokio::test]
async fn returns_all_when_fewer_than_qty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_article(db, user.id).await?;
    factory::create_article(db, user.id).await?;

    let page = ArticleRepository::new(db).get_qty(5).await?.unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(!page.is_next);

    Ok(())
}
