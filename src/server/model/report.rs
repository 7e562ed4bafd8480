//! Report domain models and parameters.
//!
//! Comment, post and profile comment reports share one shape keyed by
//! (reporting user, reported target, reason). User reports carry their own id.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::report::{
    NewReportDto, NewReportUserDto, ReasonDto, ReportDto, ReportUserDto, UpdateReportDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reason {
    pub id: i32,
    pub name: String,
}

impl Reason {
    pub fn from_entity(entity: entity::reason::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ReasonDto {
        ReasonDto {
            id_reason: self.id,
            name: self.name,
        }
    }
}

/// Kind of content a composite-key report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Post,
    PostComment,
    ArticleComment,
    ProfileComment,
}

/// Composite key of a content report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportKey {
    pub id_user: i32,
    pub id_target: i32,
    pub id_reason: i32,
}

impl ReportKey {
    pub fn new(id_user: i32, id_target: i32, id_reason: i32) -> Self {
        Self {
            id_user,
            id_target,
            id_reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub key: ReportKey,
    pub reason: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub viewed: bool,
}

impl Report {
    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            id_user: self.key.id_user,
            id_target: self.key.id_target,
            id_reason: self.key.id_reason,
            reason: self.reason,
            description: self.description,
            reported_at: self.reported_at,
            viewed: self.viewed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub key: ReportKey,
    pub description: String,
}

impl CreateReportParams {
    pub fn from_dto(dto: NewReportDto) -> Self {
        Self {
            key: ReportKey::new(dto.id_user, dto.id_target, dto.id_reason),
            description: dto.description,
        }
    }
}

/// New description and viewed flag of an existing report.
#[derive(Debug, Clone)]
pub struct UpdateReportParams {
    pub description: String,
    pub viewed: bool,
}

impl UpdateReportParams {
    pub fn from_dto(dto: UpdateReportDto) -> Self {
        Self {
            description: dto.description,
            viewed: dto.viewed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    pub id: i32,
    pub id_user_reported: i32,
    pub id_user_reporting: i32,
    pub id_reason: i32,
    pub reason: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub viewed: bool,
}

impl UserReport {
    pub fn from_entity(entity: entity::report_user::Model, reason: String) -> Self {
        Self {
            id: entity.id,
            id_user_reported: entity.id_user_reported,
            id_user_reporting: entity.id_user_reporting,
            id_reason: entity.id_reason,
            reason,
            description: entity.description,
            reported_at: entity.reported_at,
            viewed: entity.viewed,
        }
    }

    pub fn into_dto(self) -> ReportUserDto {
        ReportUserDto {
            id_report: self.id,
            id_user_reported: self.id_user_reported,
            id_user_reporting: self.id_user_reporting,
            id_reason: self.id_reason,
            reason: self.reason,
            description: self.description,
            reported_at: self.reported_at,
            viewed: self.viewed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserReportParams {
    pub id_user_reported: i32,
    pub id_user_reporting: i32,
    pub id_reason: i32,
    pub description: String,
}

impl CreateUserReportParams {
    pub fn from_dto(dto: NewReportUserDto) -> Self {
        Self {
            id_user_reported: dto.id_user_reported,
            id_user_reporting: dto.id_user_reporting,
            id_reason: dto.id_reason,
            description: dto.description,
        }
    }
}
