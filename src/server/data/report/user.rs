use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::report::reason_names,
    error::{domain::DomainError, AppError},
    model::{
        actor::Actor,
        report::{CreateUserReportParams, UpdateReportParams, UserReport},
    },
    util::authorizer::ensure_self_or_admin,
};

pub struct UserReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<UserReport>, AppError> {
        let rows = entity::prelude::ReportUser::find()
            .order_by_desc(entity::report_user::Column::ReportedAt)
            .order_by_desc(entity::report_user::Column::Id)
            .all(self.db)
            .await?;

        self.to_reports(rows).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<UserReport>, AppError> {
        let Some(row) = entity::prelude::ReportUser::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.to_reports(vec![row]).await?.pop())
    }

    /// Files a report against a user.
    ///
    /// # Returns
    /// - `Ok(Some(UserReport))` - Stored report
    /// - `Ok(None)` - Either user or the reason not found
    /// - `Err(DomainError::UserCreator)` - A user reporting themselves
    /// - `Err(AuthError::AccessDenied)` - Actor reports on behalf of someone else
    pub async fn create(
        &self,
        params: CreateUserReportParams,
        actor: &Actor,
    ) -> Result<Option<UserReport>, AppError> {
        let reported = entity::prelude::User::find_by_id(params.id_user_reported)
            .one(self.db)
            .await?;
        let reporting = entity::prelude::User::find_by_id(params.id_user_reporting)
            .one(self.db)
            .await?;
        let reason = entity::prelude::Reason::find_by_id(params.id_reason)
            .one(self.db)
            .await?;
        if reported.is_none() || reporting.is_none() || reason.is_none() {
            return Ok(None);
        }

        if params.id_user_reported == params.id_user_reporting {
            return Err(DomainError::UserCreator("User cannot report themselves!".to_string()).into());
        }

        ensure_self_or_admin(actor, params.id_user_reporting)?;

        let row = entity::report_user::ActiveModel {
            id_user_reported: ActiveValue::Set(params.id_user_reported),
            id_user_reporting: ActiveValue::Set(params.id_user_reporting),
            id_reason: ActiveValue::Set(params.id_reason),
            description: ActiveValue::Set(params.description),
            reported_at: ActiveValue::Set(Utc::now()),
            viewed: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::info!(
            "User {} reported user {}",
            row.id_user_reporting,
            row.id_user_reported
        );

        Ok(self.to_reports(vec![row]).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReportParams,
    ) -> Result<Option<UserReport>, AppError> {
        let Some(row) = entity::prelude::ReportUser::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::report_user::ActiveModel = row.into();
        active.description = ActiveValue::Set(params.description);
        active.viewed = ActiveValue::Set(params.viewed);
        let row = active.update(self.db).await?;

        Ok(self.to_reports(vec![row]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<Option<()>, AppError> {
        let result = entity::prelude::ReportUser::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok((result.rows_affected > 0).then_some(()))
    }

    async fn to_reports(
        &self,
        rows: Vec<entity::report_user::Model>,
    ) -> Result<Vec<UserReport>, AppError> {
        let names = reason_names(self.db, rows.iter().map(|r| r.id_reason).collect()).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let reason = names.get(&r.id_reason).cloned().unwrap_or_default();
                UserReport::from_entity(r, reason)
            })
            .collect())
    }
}
