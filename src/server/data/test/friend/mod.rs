use crate::server::{
    data::friend::FriendRepository,
    error::{domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        outcome::{AddOutcome, RemoveOutcome},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
