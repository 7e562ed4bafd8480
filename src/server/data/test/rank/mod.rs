use crate::server::{
    data::rank::RankRepository,
    error::{domain::DomainError, AppError},
    model::rank::RankParams,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(name: &str, rank_level: i32) -> RankParams {
    RankParams {
        name: name.to_string(),
        rank_level,
    }
}
