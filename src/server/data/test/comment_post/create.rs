use super::*;

/// Tests commenting on a post.
///
/// Expected: Ok(Some) carrying the author's nick, listed under the post
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostCommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            id_user: commenter.id,
            id_parent: post.id,
            description: "Nice one".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(comment.nick, commenter.nick);
    assert_eq!(comment.id_post, post.id);

    let listed = repo.get_by_post(post.id).await?.unwrap();
    assert_eq!(listed, vec![comment]);

    Ok(())
}

/// Tests commenting on a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = PostCommentRepository::new(db)
        .create(CreateCommentParams {
            id_user: user.id,
            id_parent: 404,
            description: "Hello?".to_string(),
        })
        .await?;

    assert!(result.is_none());
    assert!(PostCommentRepository::new(db).get_by_post(404).await?.is_none());

    Ok(())
}
