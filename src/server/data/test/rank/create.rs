use super::*;

/// Tests that ranks are listed by level after creation.
///
/// Expected: Ok with ranks ordered by ascending level
#[tokio::test]
async fn lists_created_ranks_by_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RankRepository::new(db);
    repo.create(params("Admin", 10)).await?;
    repo.create(params("User", 1)).await?;
    repo.create(params("Moderator", 5)).await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["User", "Moderator", "Admin"]);

    Ok(())
}

/// Tests creating a rank whose name is taken.
///
/// Expected: Err(DomainError::SameName)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rank::create_named_rank(db, "Admin", 10).await?;

    let result = RankRepository::new(db).create(params("Admin", 3)).await;

    match result {
        Err(AppError::DomainErr(DomainError::SameName(msg))) => {
            assert_eq!(msg, "Rank with given name already exists!")
        }
        other => panic!("Expected SameName, got: {:?}", other),
    }

    Ok(())
}
