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
        comment::{CreateCommentParams, ArticleComment, UpdateCommentParams},
    },
    util::authorizer::{is_author_or_admin, is_author_or_has_right_role_or_is_owner},
};

pub struct ArticleCommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleCommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of an article, oldest first; `None` when the article does not exist.
    pub async fn get_by_article(&self, id_article: i32) -> Result<Option<Vec<ArticleComment>>, AppError> {
        if entity::prelude::Article::find_by_id(id_article).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let comments = entity::prelude::CommentArticle::find()
            .filter(entity::comment_article::Column::IdArticle.eq(id_article))
            .order_by_asc(entity::comment_article::Column::CreatedAt)
            .order_by_asc(entity::comment_article::Column::Id)
            .all(self.db)
            .await?;
        let nicks = nicks_of(self.db, comments.iter().map(|c| c.id_user).collect()).await?;

        Ok(Some(
            comments
                .into_iter()
                .map(|c| {
                    let nick = nicks.get(&c.id_user).cloned().unwrap_or_default();
                    ArticleComment::from_entity(c, nick)
                })
                .collect(),
        ))
    }

    /// Adds a comment to an article.
    ///
    /// # Returns
    /// - `Ok(Some(ArticleComment))` - Created comment with the author's nick
    /// - `Ok(None)` - Author or article not found
    pub async fn create(&self, params: CreateCommentParams) -> Result<Option<ArticleComment>, AppError> {
        let Some(author) = entity::prelude::User::find_by_id(params.id_user).one(self.db).await? else {
            return Ok(None);
        };
        if entity::prelude::Article::find_by_id(params.id_parent)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let comment = entity::comment_article::ActiveModel {
            id_user: ActiveValue::Set(author.id),
            id_article: ActiveValue::Set(params.id_parent),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(ArticleComment::from_entity(comment, author.nick)))
    }

    /// Edits a comment.
    ///
    /// The comment must match id, author and article together.
    ///
    /// # Returns
    /// - `Ok(Some(ArticleComment))` - Updated comment
    /// - `Ok(None)` - No comment matches
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the author nor an admin
    pub async fn update(
        &self,
        params: UpdateCommentParams,
        actor: &Actor,
    ) -> Result<Option<ArticleComment>, AppError> {
        let Some(comment) = entity::prelude::CommentArticle::find_by_id(params.id)
            .filter(entity::comment_article::Column::IdUser.eq(params.id_user))
            .filter(entity::comment_article::Column::IdArticle.eq(params.id_parent))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, comment.id_user) {
            return Err(
                AuthError::AccessDenied(actor.id, format!("modify article comment {}", comment.id))
                    .into(),
            );
        }

        let mut active: entity::comment_article::ActiveModel = comment.into();
        active.description = ActiveValue::Set(params.description);
        let comment = active.update(self.db).await?;

        let nick = nicks_of(self.db, vec![comment.id_user])
            .await?
            .remove(&comment.id_user)
            .unwrap_or_default();

        Ok(Some(ArticleComment::from_entity(comment, nick)))
    }

    /// Deletes a comment and its reports.
    ///
    /// Allowed for the author, admins, moderators and the author of the article.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(comment) = entity::prelude::CommentArticle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let Some(article) = entity::prelude::Article::find_by_id(comment.id_article)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, comment.id_user, article.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete article comment {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_article_comments(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }
}
