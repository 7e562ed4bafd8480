use crate::server::{
    data::link::LinkRepository,
    error::{auth::AuthError, AppError},
    model::{
        actor::{Actor, Role},
        link::LinkPlatform,
    },
};
use test_utils::{builder::TestBuilder, factory};
