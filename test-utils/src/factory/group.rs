//! Group factory for creating groups and their memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups.
///
/// The creator is added as the first member, matching how groups are created
/// through the API.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    id_user_creator: i32,
    group_name: String,
    description: Option<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory owned by `id_user_creator`.
    ///
    /// Defaults:
    /// - group_name: `"Group {id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, id_user_creator: i32) -> Self {
        Self {
            db,
            id_user_creator,
            group_name: format!("Group {}", next_id()),
            description: None,
        }
    }

    pub fn name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Inserts the group and the creator's membership.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let group = entity::group::ActiveModel {
            id_user_creator: ActiveValue::Set(self.id_user_creator),
            group_name: ActiveValue::Set(self.group_name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        add_group_member(self.db, group.id, self.id_user_creator).await?;

        Ok(group)
    }
}

/// Creates a group owned by `id_user_creator` with default values.
pub async fn create_group(
    db: &DatabaseConnection,
    id_user_creator: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, id_user_creator).build().await
}

/// Adds `id_user` to the members of `id_group`.
pub async fn add_group_member(
    db: &DatabaseConnection,
    id_group: i32,
    id_user: i32,
) -> Result<entity::group_user::Model, DbErr> {
    entity::group_user::ActiveModel {
        id_group: ActiveValue::Set(id_group),
        id_user: ActiveValue::Set(id_user),
    }
    .insert(db)
    .await
}

/// Posts a message from `id_user` to `id_group`.
pub async fn post_group_message(
    db: &DatabaseConnection,
    id_group: i32,
    id_user: i32,
) -> Result<entity::group_user_message::Model, DbErr> {
    entity::group_user_message::ActiveModel {
        id_group: ActiveValue::Set(id_group),
        id_user: ActiveValue::Set(id_user),
        content: ActiveValue::Set(format!("Message {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
