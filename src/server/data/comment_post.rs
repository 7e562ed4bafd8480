use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{cascade, user::nicks_of},
    error::{auth::AuthError, AppError},
    model::{
        actor::Actor,
        comment::{CreateCommentParams, PostComment, UpdateCommentParams},
    },
    util::authorizer::{is_author_or_admin, is_author_or_has_right_role_or_is_owner},
};

pub struct PostCommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostCommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of a post, oldest first; `None` when the post does not exist.
    pub async fn get_by_post(&self, id_post: i32) -> Result<Option<Vec<PostComment>>, AppError> {
        if entity::prelude::Post::find_by_id(id_post).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let comments = entity::prelude::CommentPost::find()
            .filter(entity::comment_post::Column::IdPost.eq(id_post))
            .order_by_asc(entity::comment_post::Column::CreatedAt)
            .order_by_asc(entity::comment_post::Column::Id)
            .all(self.db)
            .await?;
        let nicks = nicks_of(self.db, comments.iter().map(|c| c.id_user).collect()).await?;

        Ok(Some(
            comments
                .into_iter()
                .map(|c| {
                    let nick = nicks.get(&c.id_user).cloned().unwrap_or_default();
                    PostComment::from_entity(c, nick)
                })
                .collect(),
        ))
    }

    /// Adds a comment to a post.
    ///
    /// # Returns
    /// - `Ok(Some(PostComment))` - Created comment with the author's nick
    /// - `Ok(None)` - Author or post not found
    pub async fn create(&self, params: CreateCommentParams) -> Result<Option<PostComment>, AppError> {
        let Some(author) = entity::prelude::User::find_by_id(params.id_user).one(self.db).await? else {
            return Ok(None);
        };
        if entity::prelude::Post::find_by_id(params.id_parent)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let comment = entity::comment_post::ActiveModel {
            id_user: ActiveValue::Set(author.id),
            id_post: ActiveValue::Set(params.id_parent),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(PostComment::from_entity(comment, author.nick)))
    }

    /// Edits a comment.
    ///
    /// The comment must match id, author and post together.
    ///
    /// # Returns
    /// - `Ok(Some(PostComment))` - Updated comment
    /// - `Ok(None)` - No comment matches
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the author nor an admin
    pub async fn update(
        &self,
        params: UpdateCommentParams,
        actor: &Actor,
    ) -> Result<Option<PostComment>, AppError> {
        let Some(comment) = entity::prelude::CommentPost::find_by_id(params.id)
            .filter(entity::comment_post::Column::IdUser.eq(params.id_user))
            .filter(entity::comment_post::Column::IdPost.eq(params.id_parent))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, comment.id_user) {
            return Err(
                AuthError::AccessDenied(actor.id, format!("modify post comment {}", comment.id))
                    .into(),
            );
        }

        let mut active: entity::comment_post::ActiveModel = comment.into();
        active.description = ActiveValue::Set(params.description);
        let comment = active.update(self.db).await?;

        let nick = nicks_of(self.db, vec![comment.id_user])
            .await?
            .remove(&comment.id_user)
            .unwrap_or_default();

        Ok(Some(PostComment::from_entity(comment, nick)))
    }

    /// Deletes a comment and its reports.
    ///
    /// Allowed for the author, admins, moderators and the author of the post.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(comment) = entity::prelude::CommentPost::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let Some(post) = entity::prelude::Post::find_by_id(comment.id_post)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, comment.id_user, post.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete post comment {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_post_comments(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }
}
