//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! tests state their foreign key dependencies explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let post = factory::create_post(&db, user.id).await?;
//! let comment = factory::create_post_comment(&db, user.id, post.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .nick("CustomNick")
//!     .rank(admin_rank.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `rank` - Create rank entities
//! - `user` - Create users (creates a default rank when none is given)
//! - `post` / `article` - Create content entities
//! - `comment` - Create post and article comments
//! - `profile_comment` - Create comments on user profiles
//! - `reason` - Create report reasons
//! - `group` - Create groups, memberships and messages
//! - `helpers` - Unique id generation

pub mod article;
pub mod comment;
pub mod group;
pub mod helpers;
pub mod post;
pub mod profile_comment;
pub mod rank;
pub mod reason;
pub mod user;

pub use article::create_article;
pub use comment::{create_article_comment, create_post_comment};
pub use group::{add_group_member, create_group};
pub use post::create_post;
pub use profile_comment::create_profile_comment;
pub use rank::create_rank;
pub use reason::create_reason;
pub use user::create_user;
