use crate::model::rank::{AddRankDto, PutRankDto, RankDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    pub id: i32,
    pub name: String,
    pub rank_level: i32,
}

impl Rank {
    pub fn from_entity(entity: entity::rank::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rank_level: entity.rank_level,
        }
    }

    pub fn into_dto(self) -> RankDto {
        RankDto {
            id_rank: self.id,
            name: self.name,
            rank_level: self.rank_level,
        }
    }
}

/// Name and level of a rank being created or renamed.
#[derive(Debug, Clone)]
pub struct RankParams {
    pub name: String,
    pub rank_level: i32,
}

impl RankParams {
    pub fn from_add_dto(dto: AddRankDto) -> Self {
        Self {
            name: dto.name,
            rank_level: dto.rank_level,
        }
    }

    pub fn from_put_dto(dto: PutRankDto) -> Self {
        Self {
            name: dto.name,
            rank_level: dto.rank_level,
        }
    }
}
