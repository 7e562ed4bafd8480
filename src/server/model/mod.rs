//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types at the data boundary, and
//! controllers convert them into DTOs with `into_dto()`.

pub mod actor;
pub mod article;
pub mod comment;
pub mod group;
pub mod link;
pub mod listing;
pub mod outcome;
pub mod post;
pub mod profile_comment;
pub mod rank;
pub mod report;
pub mod social;
pub mod user;
