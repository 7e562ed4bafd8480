use super::*;

/// Tests the top listing with more articles than it returns.
///
/// Verifies that equally liked articles keep ascending id order.
///
/// Expected: the liked article, then the two lowest unliked ids
#[tokio::test]
async fn returns_most_liked_then_lowest_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut articles = Vec::new();
    for _ in 0..5 {
        articles.push(factory::create_article(db, user.id).await?);
    }
    factory::article::like_article(db, user.id, articles[3].id).await?;

    let top = ArticleRepository::new(db).get_top().await?.unwrap();

    let ids: Vec<i32> = top.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![articles[3].id, articles[0].id, articles[1].id]);
    assert_eq!(top[0].likes, 1);

    Ok(())
}

/// Expected: Ok(None) without articles
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ArticleRepository::new(db).get_top().await?.is_none());

    Ok(())
}
