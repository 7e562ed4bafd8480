use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        user::{AddUserParams, UpdateUserParams, UserPhoto},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod change_rank;
mod delete;
mod photo;
mod update;

fn add_params(nick: &str) -> AddUserParams {
    AddUserParams {
        nick: nick.to_string(),
        password_hash: "$argon2id$stored-hash".to_string(),
        email: format!("{}@example.com", nick.to_lowercase()),
        phone_number: None,
    }
}
