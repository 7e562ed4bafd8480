use super::*;

/// Tests deleting a reason cited by a report.
///
/// Verifies that reports citing the reason are deleted with it.
///
/// Expected: Ok(Some(())) and no reports or reasons left
#[tokio::test]
async fn removes_citing_reports() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = ReasonRepository::new(db);
    let reason = repo.create("Spam".to_string()).await?;
    PostReportRepository::new(db)
        .create(
            CreateReportParams {
                key: ReportKey::new(reporter.id, post.id, reason.id),
                description: "Ads".to_string(),
            },
            &Actor::new(reporter.id, Role::User),
        )
        .await?;

    assert!(repo.delete(reason.id).await?.is_some());
    assert!(repo.get_all().await?.is_empty());
    assert_eq!(entity::prelude::ReportPost::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(None) for a reason that does not exist
#[tokio::test]
async fn returns_none_for_missing_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ReasonRepository::new(db).delete(8).await?.is_none());

    Ok(())
}
