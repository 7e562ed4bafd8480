//! Article domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::article::{ArticleDetailsDto, ArticleDto, ArticleQtyDto, NewArticleDto, PutArticleDto},
    server::model::{
        comment::ArticleComment,
        listing::QtyPage,
        post::Tag,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub id_user: i32,
    pub nick: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub highlight: bool,
    pub likes: u64,
    pub comments: u64,
    pub tags: Vec<Tag>,
}

impl Article {
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id_article: self.id,
            id_user: self.id_user,
            nick: self.nick,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            highlight: self.highlight,
            likes: self.likes,
            comments_count: self.comments,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

impl QtyPage<Article> {
    pub fn into_dto(self) -> ArticleQtyDto {
        ArticleQtyDto {
            articles: self.items.into_iter().map(Article::into_dto).collect(),
            is_next: self.is_next,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetails {
    pub article: Article,
    pub comments: Vec<ArticleComment>,
}

impl ArticleDetails {
    pub fn into_dto(self) -> ArticleDetailsDto {
        ArticleDetailsDto {
            article: self.article.into_dto(),
            comments: self
                .comments
                .into_iter()
                .map(ArticleComment::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub id_user: i32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl CreateArticleParams {
    pub fn from_dto(dto: NewArticleDto) -> Self {
        Self {
            id_user: dto.id_user,
            title: dto.title,
            content: dto.content,
            tags: dto.tags,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateArticleParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl UpdateArticleParams {
    pub fn from_dto(dto: PutArticleDto) -> Self {
        Self {
            id: dto.id_article,
            title: dto.title,
            content: dto.content,
            tags: dto.tags,
        }
    }
}
