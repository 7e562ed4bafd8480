use crate::server::{
    data::report::{
        user::UserReportRepository, ArticleCommentReportRepository, PostCommentReportRepository,
        PostReportRepository, ProfileCommentReportRepository,
    },
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        report::{CreateReportParams, CreateUserReportParams, ReportKey, UpdateReportParams},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod article_comment;
mod post_comment;
mod profile_comment;
