use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        actor::Actor,
        outcome::{AddOutcome, RemoveOutcome},
        social::UserRef,
    },
    util::authorizer::ensure_self_or_admin,
};

/// Friendships are stored as two rows, one per direction.
pub struct FriendRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the friends of a user ordered by nick; `None` when the user does not exist.
    pub async fn get_friends(&self, id_user: i32) -> Result<Option<Vec<UserRef>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let friend_ids: Vec<i32> = entity::prelude::Friend::find()
            .filter(entity::friend::Column::IdUser.eq(id_user))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| f.id_user_friend)
            .collect();

        let friends = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(friend_ids))
            .order_by_asc(entity::user::Column::Nick)
            .all(self.db)
            .await?;

        Ok(Some(friends.iter().map(UserRef::from_entity).collect()))
    }

    /// Makes two users friends.
    ///
    /// # Returns
    /// - `Ok(AddOutcome::Created)` - Friendship stored in both directions
    /// - `Ok(AddOutcome::AlreadyExists)` - Already friends
    /// - `Ok(AddOutcome::NotFound)` - Either user not found
    /// - `Err(DomainError::UserCreator)` - A user befriending themselves
    pub async fn add(
        &self,
        id_user: i32,
        id_friend: i32,
        actor: &Actor,
    ) -> Result<AddOutcome, AppError> {
        if !self.both_exist(id_user, id_friend).await? {
            return Ok(AddOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        if id_user == id_friend {
            return Err(DomainError::UserCreator("User cannot befriend themselves!".to_string()).into());
        }

        if entity::prelude::Friend::find_by_id((id_user, id_friend))
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(AddOutcome::AlreadyExists);
        }

        let txn = self.db.begin().await?;
        for (a, b) in [(id_user, id_friend), (id_friend, id_user)] {
            if entity::prelude::Friend::find_by_id((a, b)).one(&txn).await?.is_none() {
                entity::friend::ActiveModel {
                    id_user: ActiveValue::Set(a),
                    id_user_friend: ActiveValue::Set(b),
                }
                .insert(&txn)
                .await?;
            }
        }
        txn.commit().await?;

        Ok(AddOutcome::Created)
    }

    /// Ends a friendship in both directions
    pub async fn remove(
        &self,
        id_user: i32,
        id_friend: i32,
        actor: &Actor,
    ) -> Result<RemoveOutcome, AppError> {
        if !self.both_exist(id_user, id_friend).await? {
            return Ok(RemoveOutcome::NotFound);
        }
        ensure_self_or_admin(actor, id_user)?;

        let result = entity::prelude::Friend::delete_many()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::friend::Column::IdUser.eq(id_user))
                            .add(entity::friend::Column::IdUserFriend.eq(id_friend)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::friend::Column::IdUser.eq(id_friend))
                            .add(entity::friend::Column::IdUserFriend.eq(id_user)),
                    ),
            )
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
