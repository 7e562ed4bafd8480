use crate::server::{
    data::comment_article::ArticleCommentRepository,
    error::{auth::AuthError, AppError},
    model::{
        actor::{Actor, Role},
        comment::{CreateCommentParams, UpdateCommentParams},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
