use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::rank::{Rank, RankParams},
};

pub struct RankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all ranks ordered by level
    pub async fn get_all(&self) -> Result<Vec<Rank>, AppError> {
        let ranks = entity::prelude::Rank::find()
            .order_by_asc(entity::rank::Column::RankLevel)
            .order_by_asc(entity::rank::Column::Id)
            .all(self.db)
            .await?;

        Ok(ranks.into_iter().map(Rank::from_entity).collect())
    }

    /// Creates a rank, rejecting a name that is already used
    pub async fn create(&self, params: RankParams) -> Result<Rank, AppError> {
        if self.find_by_name(&params.name).await?.is_some() {
            return Err(same_name());
        }

        let rank = entity::rank::ActiveModel {
            name: ActiveValue::Set(params.name),
            rank_level: ActiveValue::Set(params.rank_level),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rank::from_entity(rank))
    }

    /// Renames or re-levels a rank.
    ///
    /// Keeping the rank's own name is allowed; taking another rank's name is not.
    ///
    /// # Returns
    /// - `Ok(Some(Rank))` - Updated rank
    /// - `Ok(None)` - Rank not found
    /// - `Err(DomainError::SameName)` - Another rank has the requested name
    pub async fn update(&self, id: i32, params: RankParams) -> Result<Option<Rank>, AppError> {
        let Some(rank) = entity::prelude::Rank::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if let Some(other) = self.find_by_name(&params.name).await? {
            if other.id != id {
                return Err(same_name());
            }
        }

        let mut active: entity::rank::ActiveModel = rank.into();
        active.name = ActiveValue::Set(params.name);
        active.rank_level = ActiveValue::Set(params.rank_level);
        let rank = active.update(self.db).await?;

        Ok(Some(Rank::from_entity(rank)))
    }

    /// Deletes a rank no user holds.
    ///
    /// # Returns
    /// - `Ok(Some(()))` - Rank deleted
    /// - `Ok(None)` - Rank not found
    /// - `Err(DomainError::Reference)` - At least one user has this rank
    pub async fn delete(&self, id: i32) -> Result<Option<()>, AppError> {
        if entity::prelude::Rank::find_by_id(id).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let holders = entity::prelude::User::find()
            .filter(entity::user::Column::IdRank.eq(id))
            .count(self.db)
            .await?;
        if holders > 0 {
            return Err(
                DomainError::Reference("Cannot delete. Some user have this rank!".to_string()).into(),
            );
        }

        entity::prelude::Rank::delete_by_id(id).exec(self.db).await?;

        Ok(Some(()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<entity::rank::Model>, AppError> {
        Ok(entity::prelude::Rank::find()
            .filter(entity::rank::Column::Name.eq(name))
            .one(self.db)
            .await?)
    }
}

fn same_name() -> AppError {
    DomainError::SameName("Rank with given name already exists!".to_string()).into()
}
