//! Group domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::group::{GroupDetailsDto, GroupDto, GroupMessageDto, NewGroupDto, PutGroupDto},
    server::model::social::UserRef,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub id_user_creator: i32,
    pub group_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub members_count: u64,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model, members_count: u64) -> Self {
        Self {
            id: entity.id,
            id_user_creator: entity.id_user_creator,
            group_name: entity.group_name,
            description: entity.description,
            created_at: entity.created_at,
            members_count,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id_group: self.id,
            id_user_creator: self.id_user_creator,
            group_name: self.group_name,
            description: self.description,
            created_at: self.created_at,
            members_count: self.members_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupDetails {
    pub group: Group,
    pub members: Vec<UserRef>,
}

impl GroupDetails {
    pub fn into_dto(self) -> GroupDetailsDto {
        GroupDetailsDto {
            group: self.group.into_dto(),
            members: self.members.into_iter().map(UserRef::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub id_user_creator: i32,
    pub group_name: String,
    pub description: Option<String>,
}

impl CreateGroupParams {
    pub fn from_dto(dto: NewGroupDto) -> Self {
        Self {
            id_user_creator: dto.id_user_creator,
            group_name: dto.group_name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub group_name: String,
    pub description: Option<String>,
}

impl UpdateGroupParams {
    pub fn from_dto(dto: PutGroupDto) -> Self {
        Self {
            id: dto.id_group,
            group_name: dto.group_name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMessage {
    pub id: i32,
    pub id_group: i32,
    pub id_user: i32,
    pub nick: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl GroupMessage {
    pub fn from_entity(entity: entity::group_user_message::Model, nick: String) -> Self {
        Self {
            id: entity.id,
            id_group: entity.id_group,
            id_user: entity.id_user,
            nick,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GroupMessageDto {
        GroupMessageDto {
            id_message: self.id,
            id_group: self.id_group,
            id_user: self.id_user,
            nick: self.nick,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
