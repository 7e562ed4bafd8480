//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every write first checks that the rows it references exist, returning `None` when one
//! is missing, and then checks the actor against the authorization predicates.

pub mod article;
pub mod blocked;
pub mod cascade;
pub mod comment_article;
pub mod comment_post;
pub mod friend;
pub mod group;
pub mod group_message;
pub mod like_article;
pub mod like_post;
pub mod link;
pub mod listing;
pub mod post;
pub mod profile_comment;
pub mod rank;
pub mod reason;
pub mod report;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
