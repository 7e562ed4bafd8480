//! Post domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{NewPostDto, PostDetailsDto, PostDto, PostQtyDto, PutPostDto, TagDto},
    server::model::{
        comment::PostComment,
        listing::QtyPage,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id_tag: self.id,
            name: self.name,
        }
    }
}

/// Post with its author's nick, tags and engagement counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub id_user: i32,
    pub nick: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub highlight: bool,
    pub likes: u64,
    pub comments: u64,
    pub tags: Vec<Tag>,
}

impl Post {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id_post: self.id,
            id_user: self.id_user,
            nick: self.nick,
            content: self.content,
            created_at: self.created_at,
            highlight: self.highlight,
            likes: self.likes,
            comments_count: self.comments,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

impl QtyPage<Post> {
    pub fn into_dto(self) -> PostQtyDto {
        PostQtyDto {
            posts: self.items.into_iter().map(Post::into_dto).collect(),
            is_next: self.is_next,
        }
    }
}

/// A post together with its comments.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetails {
    pub post: Post,
    pub comments: Vec<PostComment>,
}

impl PostDetails {
    pub fn into_dto(self) -> PostDetailsDto {
        PostDetailsDto {
            post: self.post.into_dto(),
            comments: self
                .comments
                .into_iter()
                .map(PostComment::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a post. Tag names that don't exist yet are created.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub id_user: i32,
    pub content: String,
    pub tags: Vec<String>,
}

impl CreatePostParams {
    pub fn from_dto(dto: NewPostDto) -> Self {
        Self {
            id_user: dto.id_user,
            content: dto.content,
            tags: dto.tags,
        }
    }
}

/// Parameters for replacing a post's content and tags.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub content: String,
    pub tags: Vec<String>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: PutPostDto) -> Self {
        Self {
            id: dto.id_post,
            content: dto.content,
            tags: dto.tags,
        }
    }
}
