use crate::server::{
    data::comment_post::PostCommentRepository,
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
