use super::*;

/// Creates three posts: the first two share a creation time, the third is older.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<Vec<entity::post::Model>, AppError> {
    let author = factory::create_user(db).await?;
    let fan = factory::create_user(db).await?;
    let now = Utc::now();

    let posts = vec![
        factory::post::PostFactory::new(db, author.id)
            .created_at(now - Duration::hours(1))
            .build()
            .await?,
        factory::post::PostFactory::new(db, author.id)
            .created_at(now - Duration::hours(1))
            .build()
            .await?,
        factory::post::PostFactory::new(db, author.id)
            .created_at(now - Duration::hours(2))
            .build()
            .await?,
    ];

    // Likes: 1, 1, 2. Comments: 0, 2, 1.
    factory::post::like_post(db, fan.id, posts[0].id).await?;
    factory::post::like_post(db, fan.id, posts[1].id).await?;
    factory::post::like_post(db, author.id, posts[2].id).await?;
    factory::post::like_post(db, fan.id, posts[2].id).await?;
    factory::create_post_comment(db, fan.id, posts[1].id).await?;
    factory::create_post_comment(db, fan.id, posts[1].id).await?;
    factory::create_post_comment(db, fan.id, posts[2].id).await?;

    Ok(posts)
}

async fn sorted_ids(db: &sea_orm::DatabaseConnection, order: ListingOrder) -> Result<Vec<i32>, AppError> {
    let posts = PostRepository::new(db).get_sorted(order).await?;

    Ok(posts.iter().map(|p| p.id).collect())
}

/// Tests the like orders on posts with equal like counts.
///
/// Expected: ties keep ascending id order in both directions
#[tokio::test]
async fn orders_by_likes_with_id_tie_break() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let p = seed(db).await?;

    assert_eq!(
        sorted_ids(db, ListingOrder::MostLikes).await?,
        vec![p[2].id, p[0].id, p[1].id]
    );
    assert_eq!(
        sorted_ids(db, ListingOrder::LeastLikes).await?,
        vec![p[0].id, p[1].id, p[2].id]
    );

    Ok(())
}

/// Tests the comment and date orders.
///
/// Expected: most commented first; equal creation times keep ascending id order
#[tokio::test]
async fn orders_by_comments_and_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let p = seed(db).await?;

    assert_eq!(
        sorted_ids(db, ListingOrder::MostComments).await?,
        vec![p[1].id, p[2].id, p[0].id]
    );
    assert_eq!(
        sorted_ids(db, ListingOrder::Newest).await?,
        vec![p[0].id, p[1].id, p[2].id]
    );
    assert_eq!(
        sorted_ids(db, ListingOrder::Oldest).await?,
        vec![p[2].id, p[0].id, p[1].id]
    );

    Ok(())
}

/// Tests that the assembled counts match the rows used for ordering.
///
/// Expected: like and comment counts of the most commented post
#[tokio::test]
async fn reports_counts_of_sorted_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let posts = PostRepository::new(db)
        .get_sorted(ListingOrder::MostComments)
        .await?;

    assert_eq!(posts[0].comments, 2);
    assert_eq!(posts[0].likes, 1);

    Ok(())
}
