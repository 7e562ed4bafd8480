//! Group data repository.
//!
//! A group's creator is always one of its members: it is added on creation and
//! cannot leave. Deleting a group removes its memberships and messages.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::cascade,
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        actor::Actor,
        group::{CreateGroupParams, Group, GroupDetails, UpdateGroupParams},
        outcome::{AddOutcome, RemoveOutcome},
        social::UserRef,
    },
    util::authorizer::{ensure_self_or_admin, is_author_or_admin},
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups with their member counts, ordered by name
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::GroupName)
            .all(self.db)
            .await?;

        Ok(with_counts(self.db, groups).await?)
    }

    /// Gets a group with its members ordered by nick.
    pub async fn get(&self, id: i32) -> Result<Option<GroupDetails>, AppError> {
        let Some(group) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let member_ids: Vec<i32> = entity::prelude::GroupUser::find()
            .filter(entity::group_user::Column::IdGroup.eq(id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.id_user)
            .collect();
        let members = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(member_ids.clone()))
            .order_by_asc(entity::user::Column::Nick)
            .all(self.db)
            .await?;

        Ok(Some(GroupDetails {
            group: Group::from_entity(group, member_ids.len() as u64),
            members: members.iter().map(UserRef::from_entity).collect(),
        }))
    }

    /// Gets the groups a user belongs to; `None` when the user does not exist.
    pub async fn get_user_groups(&self, id_user: i32) -> Result<Option<Vec<Group>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let group_ids: Vec<i32> = entity::prelude::GroupUser::find()
            .filter(entity::group_user::Column::IdUser.eq(id_user))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.id_group)
            .collect();
        let groups = entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(group_ids))
            .order_by_asc(entity::group::Column::GroupName)
            .all(self.db)
            .await?;

        Ok(Some(with_counts(self.db, groups).await?))
    }

    /// Creates a group and makes its creator the first member.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Created group
    /// - `Ok(None)` - Creator not found
    /// - `Err(DomainError::SameName)` - Group name already taken
    /// - `Err(AuthError::AccessDenied)` - Actor creates a group for someone else
    pub async fn create(
        &self,
        params: CreateGroupParams,
        actor: &Actor,
    ) -> Result<Option<Group>, AppError> {
        if entity::prelude::User::find_by_id(params.id_user_creator)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }
        ensure_self_or_admin(actor, params.id_user_creator)?;

        if self.find_by_name(&params.group_name).await?.is_some() {
            return Err(same_name());
        }

        let txn = self.db.begin().await?;
        let group = entity::group::ActiveModel {
            id_user_creator: ActiveValue::Set(params.id_user_creator),
            group_name: ActiveValue::Set(params.group_name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        entity::group_user::ActiveModel {
            id_group: ActiveValue::Set(group.id),
            id_user: ActiveValue::Set(group.id_user_creator),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        Ok(Some(Group::from_entity(group, 1)))
    }

    /// Renames a group or changes its description. Creator or admin only.
    pub async fn update(
        &self,
        params: UpdateGroupParams,
        actor: &Actor,
    ) -> Result<Option<Group>, AppError> {
        let Some(group) = entity::prelude::Group::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, group.id_user_creator) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify group {}", group.id)).into());
        }

        if let Some(other) = self.find_by_name(&params.group_name).await? {
            if other.id != group.id {
                return Err(same_name());
            }
        }

        let mut active: entity::group::ActiveModel = group.into();
        active.group_name = ActiveValue::Set(params.group_name);
        active.description = ActiveValue::Set(params.description);
        let group = active.update(self.db).await?;

        Ok(with_counts(self.db, vec![group]).await?.pop())
    }

    /// Deletes a group with its memberships and messages. Creator or admin only.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(group) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, group.id_user_creator) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete group {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_groups(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }

    /// Adds a user to a group
    pub async fn join(&self, id_group: i32, id_user: i32, actor: &Actor) -> Result<AddOutcome, AppError> {
        if !self.both_exist(id_group, id_user).await? {
            return Ok(AddOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if self.membership(id_group, id_user).await?.is_some() {
            return Ok(AddOutcome::AlreadyExists);
        }

        entity::group_user::ActiveModel {
            id_group: ActiveValue::Set(id_group),
            id_user: ActiveValue::Set(id_user),
        }
        .insert(self.db)
        .await?;

        Ok(AddOutcome::Created)
    }

    /// Removes a user from a group.
    ///
    /// # Returns
    /// - `Ok(RemoveOutcome::Removed)` - Membership removed
    /// - `Ok(RemoveOutcome::Absent)` - User was not a member
    /// - `Ok(RemoveOutcome::NotFound)` - Group or user not found
    /// - `Err(DomainError::UserCreator)` - The creator tried to leave
    pub async fn leave(
        &self,
        id_group: i32,
        id_user: i32,
        actor: &Actor,
    ) -> Result<RemoveOutcome, AppError> {
        let Some(group) = entity::prelude::Group::find_by_id(id_group).one(self.db).await? else {
            return Ok(RemoveOutcome::NotFound);
        };
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(RemoveOutcome::NotFound);
        }

        if actor.id != group.id_user_creator {
            ensure_self_or_admin(actor, id_user)?;
        }

        if group.id_user_creator == id_user {
            return Err(
                DomainError::UserCreator("Group creator cannot leave the group!".to_string()).into(),
            );
        }

        if self.membership(id_group, id_user).await?.is_none() {
            return Ok(RemoveOutcome::Absent);
        }

        entity::prelude::GroupUser::delete_by_id((id_group, id_user))
            .exec(self.db)
            .await?;

        Ok(RemoveOutcome::Removed)
    }

    /// Whether the user is a member; `None` when the group or the user does not exist.
    pub async fn is_member(&self, id_group: i32, id_user: i32) -> Result<Option<bool>, AppError> {
        if !self.both_exist(id_group, id_user).await? {
            return Ok(None);
        }

        Ok(Some(self.membership(id_group, id_user).await?.is_some()))
    }

    async fn membership(
        &self,
        id_group: i32,
        id_user: i32,
    ) -> Result<Option<entity::group_user::Model>, AppError> {
        Ok(entity::prelude::GroupUser::find_by_id((id_group, id_user))
            .one(self.db)
            .await?)
    }

    async fn both_exist(&self, id_group: i32, id_user: i32) -> Result<bool, AppError> {
        let group = entity::prelude::Group::find_by_id(id_group).one(self.db).await?;
        let user = entity::prelude::User::find_by_id(id_user).one(self.db).await?;

        Ok(group.is_some() && user.is_some())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<entity::group::Model>, AppError> {
        Ok(entity::prelude::Group::find()
            .filter(entity::group::Column::GroupName.eq(name))
            .one(self.db)
            .await?)
    }
}

fn same_name() -> AppError {
    DomainError::SameName("Group with given name already exists!".to_string()).into()
}

async fn with_counts<C: ConnectionTrait>(
    conn: &C,
    groups: Vec<entity::group::Model>,
) -> Result<Vec<Group>, DbErr> {
    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

    let mut counts: HashMap<i32, u64> = HashMap::new();
    for member in entity::prelude::GroupUser::find()
        .filter(entity::group_user::Column::IdGroup.is_in(ids))
        .all(conn)
        .await?
    {
        *counts.entry(member.id_group).or_default() += 1;
    }

    Ok(groups
        .into_iter()
        .map(|g| {
            let count = counts.get(&g.id).copied().unwrap_or(0);
            Group::from_entity(g, count)
        })
        .collect())
}
