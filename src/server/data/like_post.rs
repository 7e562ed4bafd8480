use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::{
        actor::Actor,
        outcome::{AddOutcome, RemoveOutcome},
    },
    util::authorizer::ensure_self_or_admin,
};

pub struct PostLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes a post on behalf of a user.
    ///
    /// # Returns
    /// - `Ok(AddOutcome::Created)` - Like stored
    /// - `Ok(AddOutcome::AlreadyExists)` - The user already likes the post
    /// - `Ok(AddOutcome::NotFound)` - User or post not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the user nor an admin
    pub async fn add(&self, id_user: i32, id_post: i32, actor: &Actor) -> Result<AddOutcome, AppError> {
        if !self.both_exist(id_user, id_post).await? {
            return Ok(AddOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if self.find(id_user, id_post).await?.is_some() {
            return Ok(AddOutcome::AlreadyExists);
        }

        entity::like_post::ActiveModel {
            id_user: ActiveValue::Set(id_user),
            id_post: ActiveValue::Set(id_post),
        }
        .insert(self.db)
        .await?;

        Ok(AddOutcome::Created)
    }

    /// Removes a user's like from a post
    pub async fn remove(
        &self,
        id_user: i32,
        id_post: i32,
        actor: &Actor,
    ) -> Result<RemoveOutcome, AppError> {
        if !self.both_exist(id_user, id_post).await? {
            return Ok(RemoveOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if self.find(id_user, id_post).await?.is_none() {
            return Ok(RemoveOutcome::Absent);
        }

        entity::prelude::LikePost::delete_by_id((id_user, id_post))
            .exec(self.db)
            .await?;

        Ok(RemoveOutcome::Removed)
    }

    /// Whether the user likes the post; `None` when either does not exist.
    pub async fn exists(&self, id_user: i32, id_post: i32) -> Result<Option<bool>, AppError> {
        if !self.both_exist(id_user, id_post).await? {
            return Ok(None);
        }

        Ok(Some(self.find(id_user, id_post).await?.is_some()))
    }

    async fn find(&self, id_user: i32, id_post: i32) -> Result<Option<entity::like_post::Model>, AppError> {
        Ok(entity::prelude::LikePost::find_by_id((id_user, id_post))
            .one(self.db)
            .await?)
    }

    async fn both_exist(&self, id_user: i32, id_post: i32) -> Result<bool, AppError> {
        let user = entity::prelude::User::find_by_id(id_user).one(self.db).await?;
        let post = entity::prelude::Post::find_by_id(id_post).one(self.db).await?;

        Ok(user.is_some() && post.is_some())
    }
}
