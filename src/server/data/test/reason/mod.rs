use crate::server::{
    data::{reason::ReasonRepository, report::PostReportRepository},
    error::AppError,
    model::{
        actor::{Actor, Role},
        report::{CreateReportParams, ReportKey},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
