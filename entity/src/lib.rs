//! SeaORM entity definitions for the Gryzilla schema.
//!
//! One module per table. Relations are declared as `belongs_to` foreign keys only;
//! repositories join through explicit id lookups rather than navigation properties.

pub mod prelude;

pub mod article;
pub mod article_tag;
pub mod blocked_user;
pub mod comment_article;
pub mod comment_post;
pub mod friend;
pub mod group;
pub mod group_user;
pub mod group_user_message;
pub mod like_article;
pub mod like_post;
pub mod post;
pub mod post_tag;
pub mod profile_comment;
pub mod rank;
pub mod reason;
pub mod report_comment_article;
pub mod report_comment_post;
pub mod report_post;
pub mod report_profile_comment;
pub mod report_user;
pub mod tag;
pub mod user;
