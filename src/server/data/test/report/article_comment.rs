use super::*;

/// Tests listing article comment reports filed for two reasons.
///
/// Expected: both reports, the most recent first
#[tokio::test]
async fn lists_most_recent_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;
    let comment = factory::create_article_comment(db, author.id, article.id).await?;
    let spam = factory::create_reason(db).await?;
    let abuse = factory::create_reason(db).await?;
    let actor = Actor::new(reporter.id, Role::User);

    let repo = ArticleCommentReportRepository::new(db);
    for reason in [&spam, &abuse] {
        repo.create(
            CreateReportParams {
                key: ReportKey::new(reporter.id, comment.id, reason.id),
                description: format!("Reported for {}", reason.name),
            },
            &actor,
        )
        .await?
        .unwrap();
    }

    let reasons: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.reason).collect();
    assert_eq!(reasons, vec![abuse.name, spam.name]);

    Ok(())
}

/// Tests an admin filing a report in another user's name.
///
/// Expected: Ok(Some) with the other user as reporter
#[tokio::test]
async fn admin_reports_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;
    let comment = factory::create_article_comment(db, author.id, article.id).await?;
    let reason = factory::create_reason(db).await?;

    let report = ArticleCommentReportRepository::new(db)
        .create(
            CreateReportParams {
                key: ReportKey::new(reporter.id, comment.id, reason.id),
                description: "Forwarded".to_string(),
            },
            &Actor::new(admin.id, Role::Admin),
        )
        .await?
        .unwrap();

    assert_eq!(report.key.id_user, reporter.id);

    Ok(())
}
