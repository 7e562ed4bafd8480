use crate::server::{
    data::group::GroupRepository,
    error::{domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        group::CreateGroupParams,
        outcome::{AddOutcome, RemoveOutcome},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod membership;
