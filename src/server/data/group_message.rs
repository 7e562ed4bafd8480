use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::user::nicks_of,
    error::{auth::AuthError, AppError},
    model::{actor::Actor, group::GroupMessage},
    util::authorizer::{
        ensure_self_or_admin, is_author_or_admin, is_author_or_has_right_role_or_is_owner,
    },
};

pub struct GroupMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the messages of a group, oldest first.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<GroupMessage>))` - Messages, possibly empty
    /// - `Ok(None)` - Group not found
    pub async fn get_by_group(&self, id_group: i32) -> Result<Option<Vec<GroupMessage>>, AppError> {
        if entity::prelude::Group::find_by_id(id_group).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let messages = entity::prelude::GroupUserMessage::find()
            .filter(entity::group_user_message::Column::IdGroup.eq(id_group))
            .order_by_asc(entity::group_user_message::Column::CreatedAt)
            .order_by_asc(entity::group_user_message::Column::Id)
            .all(self.db)
            .await?;
        let nicks = nicks_of(self.db, messages.iter().map(|m| m.id_user).collect()).await?;

        Ok(Some(
            messages
                .into_iter()
                .map(|m| {
                    let nick = nicks.get(&m.id_user).cloned().unwrap_or_default();
                    GroupMessage::from_entity(m, nick)
                })
                .collect(),
        ))
    }

    /// Posts a message to a group the author belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(GroupMessage))` - Stored message
    /// - `Ok(None)` - Group or author not found
    /// - `Err(AuthError::AccessDenied)` - Author is not a member, or actor posts as someone else
    pub async fn create(
        &self,
        id_group: i32,
        id_user: i32,
        content: String,
        actor: &Actor,
    ) -> Result<Option<GroupMessage>, AppError> {
        if entity::prelude::Group::find_by_id(id_group).one(self.db).await?.is_none() {
            return Ok(None);
        }
        let Some(author) = entity::prelude::User::find_by_id(id_user).one(self.db).await? else {
            return Ok(None);
        };

        ensure_self_or_admin(actor, id_user)?;
        if !self.is_member(id_group, id_user).await? {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("post to group {} without membership", id_group),
            )
            .into());
        }

        let message = entity::group_user_message::ActiveModel {
            id_group: ActiveValue::Set(id_group),
            id_user: ActiveValue::Set(id_user),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(GroupMessage::from_entity(message, author.nick)))
    }

    /// Edits a message. Author or admin only.
    pub async fn update(
        &self,
        id: i32,
        content: String,
        actor: &Actor,
    ) -> Result<Option<GroupMessage>, AppError> {
        let Some(message) = entity::prelude::GroupUserMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, message.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify group message {}", id)).into());
        }

        let mut active: entity::group_user_message::ActiveModel = message.into();
        active.content = ActiveValue::Set(content);
        let message = active.update(self.db).await?;

        let nick = nicks_of(self.db, vec![message.id_user])
            .await?
            .remove(&message.id_user)
            .unwrap_or_default();

        Ok(Some(GroupMessage::from_entity(message, nick)))
    }

    /// Deletes a message. Allowed for the author, admins, moderators and the group creator.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(message) = entity::prelude::GroupUserMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let Some(group) = entity::prelude::Group::find_by_id(message.id_group)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, message.id_user, group.id_user_creator) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete group message {}", id)).into());
        }

        entity::prelude::GroupUserMessage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(()))
    }

    async fn is_member(&self, id_group: i32, id_user: i32) -> Result<bool, AppError> {
        Ok(entity::prelude::GroupUser::find_by_id((id_group, id_user))
            .one(self.db)
            .await?
            .is_some())
    }
}
