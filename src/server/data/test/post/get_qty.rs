use super::*;

/// Tests requesting fewer posts than the minimum on an empty database.
///
/// Verifies that the quantity is checked before the emptiness of the table.
///
/// Expected: Err(DomainError::WrongNumber)
#[tokio::test]
async fn rejects_quantity_below_floor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db).get_qty(4).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::WrongNumber(_)))
    ));

    Ok(())
}

/// Tests a qty listing when there are no posts.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PostRepository::new(db).get_qty(5).await?.is_none());

    Ok(())
}

/// Tests that a qty listing reports whether more posts follow.
///
/// Expected: five posts and `is_next` set when six exist
#[tokio::test]
async fn reports_next_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..6 {
        factory::create_post(db, user.id).await?;
    }

    let page = PostRepository::new(db).get_qty(5).await?.unwrap();

    assert_eq!(page.items.len(), 5);
    assert!(page.is_next);

    Ok(())
}

/// Tests a sorted qty listing with a cutoff time.
///
/// Verifies that posts created at or after the cutoff are excluded and the rest
/// are ordered by likes.
///
/// Expected: the older posts, most liked first
#[tokio::test]
async fn sorts_by_likes_before_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let fan = factory::create_user(db).await?;
    let now = Utc::now();

    let quiet = factory::post::PostFactory::new(db, author.id)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let popular = factory::post::PostFactory::new(db, author.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let recent = factory::post::PostFactory::new(db, author.id)
        .created_at(now)
        .build()
        .await?;
    factory::post::like_post(db, author.id, popular.id).await?;
    factory::post::like_post(db, fan.id, popular.id).await?;
    factory::post::like_post(db, fan.id, recent.id).await?;

    let page = PostRepository::new(db)
        .get_qty_sorted(
            ListingOrder::MostLikes,
            5,
            Some(now - Duration::hours(1)),
        )
        .await?
        .unwrap();

    let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![popular.id, quiet.id]);
    assert_eq!(page.items[0].likes, 2);
    assert!(!page.is_next);

    Ok(())
}

/// Tests that a qty listing returns the first posts by id when many exist.
///
/// Expected: the five lowest ids and `is_next` set
#[tokio::test]
async fn pages_lowest_ids_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::create_post(db, user.id).await?.id);
    }

    let page = PostRepository::new(db).get_qty(5).await?.unwrap();

    let page_ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(page_ids, ids[..5].to_vec());
    assert!(page.is_next);

    Ok(())
}

/// Tests a sorted qty listing where every post is newer than the cutoff.
///
/// Expected: an empty page rather than `None`, since posts exist
#[tokio::test]
async fn returns_empty_page_before_first_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_post(db, user.id).await?;

    let page = PostRepository::new(db)
        .get_qty_sorted(
            ListingOrder::Newest,
            5,
            Some(Utc::now() - Duration::days(1)),
        )
        .await?
        .unwrap();

    assert!(page.items.is_empty());
    assert!(!page.is_next);

    Ok(())
}
