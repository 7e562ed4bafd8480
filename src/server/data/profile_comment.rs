use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    data::cascade,
    error::{auth::AuthError, AppError},
    model::{actor::Actor, profile_comment::ProfileComment},
    util::authorizer::{is_author_or_admin, is_author_or_has_right_role_or_is_owner},
};

pub struct ProfileCommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileCommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments left on a user's profile, newest first.
    ///
    /// Each comment carries its author's nick and photo.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<ProfileComment>))` - Comments, possibly empty
    /// - `Ok(None)` - Profile owner not found
    pub async fn get_by_profile(
        &self,
        id_user: i32,
    ) -> Result<Option<Vec<ProfileComment>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let comments = entity::prelude::ProfileComment::find()
            .filter(entity::profile_comment::Column::IdUserComment.eq(id_user))
            .order_by_desc(entity::profile_comment::Column::CreatedAt)
            .order_by_desc(entity::profile_comment::Column::Id)
            .all(self.db)
            .await?;

        let author_ids: Vec<i32> = comments.iter().map(|c| c.id_user).collect();
        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(Some(
            comments
                .into_iter()
                .filter_map(|c| {
                    let author = authors.get(&c.id_user)?;
                    Some(ProfileComment::from_entity(c, author))
                })
                .collect(),
        ))
    }

    /// Leaves a comment on a profile; `None` when the author or the profile owner is missing.
    pub async fn create(
        &self,
        id_user: i32,
        id_user_comment: i32,
        description: String,
    ) -> Result<Option<ProfileComment>, AppError> {
        let Some(author) = entity::prelude::User::find_by_id(id_user).one(self.db).await? else {
            return Ok(None);
        };
        if entity::prelude::User::find_by_id(id_user_comment)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let comment = entity::profile_comment::ActiveModel {
            id_user: ActiveValue::Set(id_user),
            id_user_comment: ActiveValue::Set(id_user_comment),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(ProfileComment::from_entity(comment, &author)))
    }

    /// Edits a comment's text. Only the author or an admin may do so.
    pub async fn update(
        &self,
        id: i32,
        description: String,
        actor: &Actor,
    ) -> Result<Option<ProfileComment>, AppError> {
        let Some(comment) = entity::prelude::ProfileComment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, comment.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify profile comment {}", id)).into());
        }

        let mut active: entity::profile_comment::ActiveModel = comment.into();
        active.description = ActiveValue::Set(description);
        let comment = active.update(self.db).await?;

        let Some(author) = entity::prelude::User::find_by_id(comment.id_user).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(ProfileComment::from_entity(comment, &author)))
    }

    /// Deletes a comment and every report filed against it.
    ///
    /// Allowed for the author, admins, moderators and the profile owner.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(comment) = entity::prelude::ProfileComment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, comment.id_user, comment.id_user_comment) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete profile comment {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_profile_comments(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }
}
