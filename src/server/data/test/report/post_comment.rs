use super::*;

/// Tests filing a post comment report and reading it back by key.
///
/// Expected: the report carries the comment id as its target and the reason name
#[tokio::test]
async fn files_and_reads_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_post_comment(db, author.id, post.id).await?;
    let reason = factory::create_reason(db).await?;
    let key = ReportKey::new(reporter.id, comment.id, reason.id);

    let repo = PostCommentReportRepository::new(db);
    repo.create(
        CreateReportParams {
            key,
            description: "Insulting".to_string(),
        },
        &Actor::new(reporter.id, Role::User),
    )
    .await?
    .unwrap();

    let report = repo.get(key).await?.unwrap();
    assert_eq!(report.key.id_target, comment.id);
    assert_eq!(report.reason, reason.name);
    assert_eq!(report.description, "Insulting");

    Ok(())
}

/// Tests reporting a post id as if it were a comment.
///
/// Verifies that the target is looked up among comments, not posts.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::create_user(db).await?;
    let post = factory::create_post(db, reporter.id).await?;
    let reason = factory::create_reason(db).await?;

    let result = PostCommentReportRepository::new(db)
        .create(
            CreateReportParams {
                key: ReportKey::new(reporter.id, post.id, reason.id),
                description: "Wrong target".to_string(),
            },
            &Actor::new(reporter.id, Role::User),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
