//! Friends, blocked users and group members, all shown as (id, nick) pairs.

use chrono::{DateTime, Utc};

use crate::model::friend::{BlockedUserDto, FriendDto};

/// Another user referenced by id and nick.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRef {
    pub id: i32,
    pub nick: String,
}

impl UserRef {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nick: entity.nick.clone(),
        }
    }

    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            id_user: self.id,
            nick: self.nick,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockedUser {
    pub user: UserRef,
    pub comment: Option<String>,
    pub blocked_at: DateTime<Utc>,
}

impl BlockedUser {
    pub fn into_dto(self) -> BlockedUserDto {
        BlockedUserDto {
            id_user: self.user.id,
            nick: self.user.nick,
            comment: self.comment,
            blocked_at: self.blocked_at,
        }
    }
}
