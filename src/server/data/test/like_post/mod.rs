use crate::server::{
    data::like_post::PostLikeRepository,
    error::{auth::AuthError, AppError},
    model::{
        actor::{Actor, Role},
        outcome::{AddOutcome, RemoveOutcome},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod add;
