use crate::server::{
    data::post::PostRepository,
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        listing::ListingOrder,
        post::{CreatePostParams, UpdatePostParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_qty;
mod get_sorted;
mod get_top;
mod remove_tag;
mod update;
