use chrono::{DateTime, Utc};

use crate::{model::profile_comment::ProfileCommentDto, server::model::user::UserPhoto};

/// Comment on a user's profile with its author's nick and photo.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileComment {
    pub id: i32,
    /// Author of the comment.
    pub id_user: i32,
    /// Owner of the profile the comment was left on.
    pub id_user_comment: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub author_photo: Option<UserPhoto>,
}

impl ProfileComment {
    pub fn from_entity(entity: entity::profile_comment::Model, author: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            id_user: entity.id_user,
            id_user_comment: entity.id_user_comment,
            nick: author.nick.clone(),
            description: entity.description,
            created_at: entity.created_at,
            author_photo: UserPhoto::from_columns(author.photo_type.clone(), author.photo.clone()),
        }
    }

    pub fn into_dto(self) -> ProfileCommentDto {
        let (photo_type, base64_photo) = match self.author_photo {
            Some(photo) => (Some(photo.photo_type.clone()), Some(photo.to_base64())),
            None => (None, None),
        };

        ProfileCommentDto {
            id_profile_comment: self.id,
            id_user: self.id_user,
            id_user_comment: self.id_user_comment,
            nick: self.nick,
            description: self.description,
            created_at: self.created_at,
            photo_type,
            base64_photo,
        }
    }
}
