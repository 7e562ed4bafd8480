use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::{
        actor::Actor,
        outcome::{AddOutcome, RemoveOutcome},
    },
    util::authorizer::ensure_self_or_admin,
};

pub struct ArticleLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes an article on behalf of a user
    pub async fn add(&self, id_user: i32, id_article: i32, actor: &Actor) -> Result<AddOutcome, AppError> {
        if !self.both_exist(id_user, id_article).await? {
            return Ok(AddOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if self.find(id_user, id_article).await?.is_some() {
            return Ok(AddOutcome::AlreadyExists);
        }

        entity::like_article::ActiveModel {
            id_user: ActiveValue::Set(id_user),
            id_article: ActiveValue::Set(id_article),
        }
        .insert(self.db)
        .await?;

        Ok(AddOutcome::Created)
    }

    /// Removes a user's like from an article
    pub async fn remove(
        &self,
        id_user: i32,
        id_article: i32,
        actor: &Actor,
    ) -> Result<RemoveOutcome, AppError> {
        if !self.both_exist(id_user, id_article).await? {
            return Ok(RemoveOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if self.find(id_user, id_article).await?.is_none() {
            return Ok(RemoveOutcome::Absent);
        }

        entity::prelude::LikeArticle::delete_by_id((id_user, id_article))
            .exec(self.db)
            .await?;

        Ok(RemoveOutcome::Removed)
    }

    /// Whether the user likes the article; `None` when either does not exist.
    pub async fn exists(&self, id_user: i32, id_article: i32) -> Result<Option<bool>, AppError> {
        if !self.both_exist(id_user, id_article).await? {
            return Ok(None);
        }

        Ok(Some(self.find(id_user, id_article).await?.is_some()))
    }

    async fn find(&self, id_user: i32, id_article: i32) -> Result<Option<entity::like_article::Model>, AppError> {
        Ok(entity::prelude::LikeArticle::find_by_id((id_user, id_article))
            .one(self.db)
            .await?)
    }

    async fn both_exist(&self, id_user: i32, id_article: i32) -> Result<bool, AppError> {
        let user = entity::prelude::User::find_by_id(id_user).one(self.db).await?;
        let post = entity::prelude::Article::find_by_id(id_article).one(self.db).await?;

        Ok(user.is_some() && post.is_some())
    }
}
