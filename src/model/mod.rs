//! Request and response shapes of the HTTP API.
//!
//! Request DTOs carry their field constraints as `validator` rules; handlers run
//! them before touching the data layer.

pub mod api;
pub mod article;
pub mod auth;
pub mod comment;
pub mod friend;
pub mod group;
pub mod link;
pub mod post;
pub mod profile_comment;
pub mod rank;
pub mod report;
pub mod user;
