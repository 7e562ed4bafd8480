use super::*;

/// Tests updating and deleting a profile comment report.
///
/// Expected: update stores the flag, delete removes the report once
#[tokio::test]
async fn updates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let comment = factory::create_profile_comment(db, author.id, owner.id).await?;
    let reason = factory::create_reason(db).await?;
    let key = ReportKey::new(owner.id, comment.id, reason.id);

    let repo = ProfileCommentReportRepository::new(db);
    repo.create(
        CreateReportParams {
            key,
            description: "Rude".to_string(),
        },
        &Actor::new(owner.id, Role::User),
    )
    .await?
    .unwrap();

    let updated = repo
        .update(
            key,
            UpdateReportParams {
                description: "Rude, warned".to_string(),
                viewed: true,
            },
        )
        .await?
        .unwrap();
    assert!(updated.viewed);
    assert_eq!(repo.get(key).await?.unwrap().description, "Rude, warned");

    assert!(repo.delete(key).await?.is_some());
    assert!(repo.get(key).await?.is_none());

    Ok(())
}

/// Tests updating a report that was never filed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileCommentReportRepository::new(db)
        .update(
            ReportKey::new(1, 1, 1),
            UpdateReportParams {
                description: "Nothing".to_string(),
                viewed: true,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
