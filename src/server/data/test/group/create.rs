use super::*;

/// Tests creating a group.
///
/// Verifies that the creator becomes the first member.
///
/// Expected: Ok(Some) with one member
#[tokio::test]
async fn adds_creator_as_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(
            CreateGroupParams {
                id_user_creator: user.id,
                group_name: "Raiders".to_string(),
                description: Some("Weekly raids".to_string()),
            },
            &Actor::new(user.id, Role::User),
        )
        .await?
        .unwrap();

    assert_eq!(group.members_count, 1);
    let details = repo.get(group.id).await?.unwrap();
    assert_eq!(details.members[0].id, user.id);
    assert_eq!(repo.is_member(group.id, user.id).await?, Some(true));

    Ok(())
}

/// Tests creating a group with a taken name.
///
/// Expected: Err(DomainError::SameName)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_group(db, user.id).await?;

    let result = GroupRepository::new(db)
        .create(
            CreateGroupParams {
                id_user_creator: user.id,
                group_name: existing.group_name.clone(),
                description: None,
            },
            &Actor::new(user.id, Role::User),
        )
        .await;

    match result {
        Err(AppError::DomainErr(DomainError::SameName(msg))) => {
            assert_eq!(msg, "Group with given name already exists!")
        }
        other => panic!("Expected SameName, got: {:?}", other),
    }

    Ok(())
}
