use crate::server::{
    data::group_message::GroupMessageRepository,
    error::{auth::AuthError, AppError},
    model::actor::{Actor, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_group;
mod update;
