use crate::server::{
    data::{profile_comment::ProfileCommentRepository, report::ProfileCommentReportRepository},
    error::{auth::AuthError, AppError},
    model::{
        actor::{Actor, Role},
        report::{CreateReportParams, ReportKey},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_profile;
mod update;
