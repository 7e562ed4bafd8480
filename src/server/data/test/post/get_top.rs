use super::*;

/// Tests the top listing.
///
/// Expected: the three most liked posts out of four
#[tokio::test]
async fn returns_three_most_liked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = [
        factory::create_user(db).await?,
        factory::create_user(db).await?,
        factory::create_user(db).await?,
    ];
    let mut posts = Vec::new();
    for _ in 0..4 {
        posts.push(factory::create_post(db, users[0].id).await?);
    }
    // Post i gets i likes.
    for (i, post) in posts.iter().enumerate() {
        for user in users.iter().take(i) {
            factory::post::like_post(db, user.id, post.id).await?;
        }
    }

    let top = PostRepository::new(db).get_top().await?.unwrap();

    let ids: Vec<i32> = top.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![posts[3].id, posts[2].id, posts[1].id]);

    Ok(())
}

/// Expected: Ok(None) without posts
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PostRepository::new(db).get_top().await?.is_none());

    Ok(())
}
