use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        actor::Actor,
        outcome::{AddOutcome, RemoveOutcome},
        social::{BlockedUser, UserRef},
    },
    util::authorizer::ensure_self_or_admin,
};

pub struct BlockedUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlockedUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the users blocked by a user, most recently blocked first.
    pub async fn get_blocked(&self, id_user: i32) -> Result<Option<Vec<BlockedUser>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let rows = entity::prelude::BlockedUser::find()
            .filter(entity::blocked_user::Column::IdUser.eq(id_user))
            .order_by_desc(entity::blocked_user::Column::BlockedAt)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id_user_blocked).collect();
        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(Some(
            rows.into_iter()
                .filter_map(|r| {
                    let user = users.get(&r.id_user_blocked)?;
                    Some(BlockedUser {
                        user: UserRef::from_entity(user),
                        comment: r.comment,
                        blocked_at: r.blocked_at,
                    })
                })
                .collect(),
        ))
    }

    /// Blocks a user, ending any friendship between the two.
    ///
    /// # Returns
    /// - `Ok(AddOutcome::Created)` - Block stored
    /// - `Ok(AddOutcome::AlreadyExists)` - Already blocked
    /// - `Ok(AddOutcome::NotFound)` - Either user not found
    /// - `Err(DomainError::UserCreator)` - A user blocking themselves
    pub async fn block(
        &self,
        id_user: i32,
        id_blocked: i32,
        comment: Option<String>,
        actor: &Actor,
    ) -> Result<AddOutcome, AppError> {
        if !self.both_exist(id_user, id_blocked).await? {
            return Ok(AddOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if id_user == id_blocked {
            return Err(DomainError::UserCreator("User cannot block themselves!".to_string()).into());
        }

        if entity::prelude::BlockedUser::find_by_id((id_user, id_blocked))
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(AddOutcome::AlreadyExists);
        }

        let txn = self.db.begin().await?;
        entity::blocked_user::ActiveModel {
            id_user: ActiveValue::Set(id_user),
            id_user_blocked: ActiveValue::Set(id_blocked),
            comment: ActiveValue::Set(comment),
            blocked_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;
        entity::prelude::Friend::delete_many()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::friend::Column::IdUser.eq(id_user))
                            .add(entity::friend::Column::IdUserFriend.eq(id_blocked)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::friend::Column::IdUser.eq(id_blocked))
                            .add(entity::friend::Column::IdUserFriend.eq(id_user)),
                    ),
            )
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(AddOutcome::Created)
    }

    pub async fn unblock(
        &self,
        id_user: i32,
        id_blocked: i32,
        actor: &Actor,
    ) -> Result<RemoveOutcome, AppError> {
        if !self.both_exist(id_user, id_blocked).await? {
            return Ok(RemoveOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        let result = entity::prelude::BlockedUser::delete_by_id((id_user, id_blocked))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(RemoveOutcome::Absent);
        }

        Ok(RemoveOutcome::Removed)
    }

    async fn both_exist(&self, id_user: i32, id_other: i32) -> Result<bool, AppError> {
        let user = entity::prelude::User::find_by_id(id_user).one(self.db).await?;
        let other = entity::prelude::User::find_by_id(id_other).one(self.db).await?;

        Ok(user.is_some() && other.is_some())
    }
}
