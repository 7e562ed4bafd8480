use super::*;

/// Tests storing and reading back a profile photo.
///
/// Expected: the stored bytes and content type are returned unchanged
#[tokio::test]
async fn stores_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let photo = UserPhoto {
        photo_type: "image/png".to_string(),
        data: vec![0x89, 0x50, 0x4e, 0x47],
    };

    let repo = UserRepository::new(db);
    assert!(repo.get_photo(user.id).await?.is_none());

    repo.set_photo(user.id, photo.clone(), &Actor::new(user.id, Role::User))
        .await?;

    assert_eq!(repo.get_photo(user.id).await?, Some(photo));

    Ok(())
}
