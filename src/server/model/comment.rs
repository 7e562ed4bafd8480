use chrono::{DateTime, Utc};

use crate::model::comment::{
    ArticleCommentDto, NewArticleCommentDto, NewPostCommentDto, PostCommentDto,
    PutArticleCommentDto, PutPostCommentDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PostComment {
    pub id: i32,
    pub id_user: i32,
    pub id_post: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl PostComment {
    pub fn from_entity(entity: entity::comment_post::Model, nick: String) -> Self {
        Self {
            id: entity.id,
            id_user: entity.id_user,
            id_post: entity.id_post,
            nick,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PostCommentDto {
        PostCommentDto {
            id_comment: self.id,
            id_user: self.id_user,
            id_post: self.id_post,
            nick: self.nick,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleComment {
    pub id: i32,
    pub id_user: i32,
    pub id_article: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ArticleComment {
    pub fn from_entity(entity: entity::comment_article::Model, nick: String) -> Self {
        Self {
            id: entity.id,
            id_user: entity.id_user,
            id_article: entity.id_article,
            nick,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ArticleCommentDto {
        ArticleCommentDto {
            id_comment: self.id,
            id_user: self.id_user,
            id_article: self.id_article,
            nick: self.nick,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// New comment on a post or an article.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub id_user: i32,
    /// Id of the commented post or article
    pub id_parent: i32,
    pub description: String,
}

impl CreateCommentParams {
    pub fn from_post_dto(dto: NewPostCommentDto) -> Self {
        Self {
            id_user: dto.id_user,
            id_parent: dto.id_post,
            description: dto.description,
        }
    }

    pub fn from_article_dto(dto: NewArticleCommentDto) -> Self {
        Self {
            id_user: dto.id_user,
            id_parent: dto.id_article,
            description: dto.description,
        }
    }
}

/// Edit of a comment, matched on the comment id together with its author and parent.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub id_user: i32,
    pub id_parent: i32,
    pub description: String,
}

impl UpdateCommentParams {
    pub fn from_post_dto(dto: PutPostCommentDto) -> Self {
        Self {
            id: dto.id_comment,
            id_user: dto.id_user,
            id_parent: dto.id_post,
            description: dto.description,
        }
    }

    pub fn from_article_dto(dto: PutArticleCommentDto) -> Self {
        Self {
            id: dto.id_comment,
            id_user: dto.id_user,
            id_parent: dto.id_article,
            description: dto.description,
        }
    }
}
