use crate::server::{
    data::{
        article::ArticleRepository,
        tag::{self, TagRepository},
    },
    error::AppError,
    model::article::CreateArticleParams,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;
mod get_all;
