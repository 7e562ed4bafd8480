//! Report repositories.
//!
//! Comment, post and profile comment reports are stored in four tables sharing one
//! shape: a composite key of reporter, reported row and reason. Their repositories
//! are generated by [`report_repository!`]. User reports have their own id and live
//! in [`user`].

pub mod user;

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Names of the given reasons keyed by id.
pub async fn reason_names<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::Reason::find()
        .filter(entity::reason::Column::Id.is_in(ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect())
}

/// Generates a repository for one composite-key report table.
///
/// # Arguments
/// - `$repo` - Name of the generated repository struct
/// - `$table` - Entity module of the report table
/// - `$report` - Entity of the report table
/// - `$target` - Entity of the reported row
/// - `$target_id` - Column field holding the reported row's id
/// - `$label` - Human readable name of the reported row, used in log messages
macro_rules! report_repository {
    ($repo:ident, $table:ident, $report:ident, $target:ident, $target_id:ident, $label:literal) => {
        pub struct $repo<'a> {
            db: &'a sea_orm::DatabaseConnection,
        }

        impl<'a> $repo<'a> {
            pub fn new(db: &'a sea_orm::DatabaseConnection) -> Self {
                Self { db }
            }

            /// Gets all reports, most recent first.
            pub async fn get_all(
                &self,
            ) -> Result<Vec<$crate::server::model::report::Report>, $crate::server::error::AppError>
            {
                let rows = entity::prelude::$report::find()
                    .order_by_desc(entity::$table::Column::ReportedAt)
                    .all(self.db)
                    .await?;

                self.to_reports(rows).await
            }

            /// Gets one report by its key.
            pub async fn get(
                &self,
                key: $crate::server::model::report::ReportKey,
            ) -> Result<Option<$crate::server::model::report::Report>, $crate::server::error::AppError>
            {
                let Some(row) = self.find(key).await? else {
                    return Ok(None);
                };

                Ok(self.to_reports(vec![row]).await?.pop())
            }

            /// Files a report.
            ///
            /// # Returns
            /// - `Ok(Some(Report))` - Stored report
            /// - `Ok(None)` - Reporter, reported row or reason not found
            /// - `Err(AuthError::AccessDenied)` - Actor reports on behalf of someone else
            /// - `Err(DomainError::Duplicate)` - Same reporter, row and reason already reported
            pub async fn create(
                &self,
                params: $crate::server::model::report::CreateReportParams,
                actor: &$crate::server::model::actor::Actor,
            ) -> Result<Option<$crate::server::model::report::Report>, $crate::server::error::AppError>
            {
                let key = params.key;
                let user = entity::prelude::User::find_by_id(key.id_user).one(self.db).await?;
                let target = entity::prelude::$target::find_by_id(key.id_target)
                    .one(self.db)
                    .await?;
                let reason = entity::prelude::Reason::find_by_id(key.id_reason)
                    .one(self.db)
                    .await?;
                if user.is_none() || target.is_none() || reason.is_none() {
                    return Ok(None);
                }

                $crate::server::util::authorizer::ensure_self_or_admin(actor, key.id_user)?;

                if self.find(key).await?.is_some() {
                    return Err($crate::server::error::domain::DomainError::Duplicate(
                        "Report already exists!".to_string(),
                    )
                    .into());
                }

                let row = entity::$table::ActiveModel {
                    id_user: ActiveValue::Set(key.id_user),
                    $target_id: ActiveValue::Set(key.id_target),
                    id_reason: ActiveValue::Set(key.id_reason),
                    description: ActiveValue::Set(params.description),
                    reported_at: ActiveValue::Set(chrono::Utc::now()),
                    viewed: ActiveValue::Set(false),
                }
                .insert(self.db)
                .await?;

                tracing::info!(
                    "User {} reported {} {} for reason {}",
                    key.id_user,
                    $label,
                    key.id_target,
                    key.id_reason
                );

                Ok(self.to_reports(vec![row]).await?.pop())
            }

            /// Updates the description and viewed flag of a report.
            pub async fn update(
                &self,
                key: $crate::server::model::report::ReportKey,
                params: $crate::server::model::report::UpdateReportParams,
            ) -> Result<Option<$crate::server::model::report::Report>, $crate::server::error::AppError>
            {
                let Some(row) = self.find(key).await? else {
                    return Ok(None);
                };

                let mut active: entity::$table::ActiveModel = row.into();
                active.description = ActiveValue::Set(params.description);
                active.viewed = ActiveValue::Set(params.viewed);
                let row = active.update(self.db).await?;

                Ok(self.to_reports(vec![row]).await?.pop())
            }

            /// Deletes a report; `None` when it does not exist.
            pub async fn delete(
                &self,
                key: $crate::server::model::report::ReportKey,
            ) -> Result<Option<()>, $crate::server::error::AppError> {
                if self.find(key).await?.is_none() {
                    return Ok(None);
                }

                entity::prelude::$report::delete_by_id((key.id_user, key.id_target, key.id_reason))
                    .exec(self.db)
                    .await?;

                Ok(Some(()))
            }

            async fn find(
                &self,
                key: $crate::server::model::report::ReportKey,
            ) -> Result<Option<entity::$table::Model>, sea_orm::DbErr> {
                entity::prelude::$report::find_by_id((key.id_user, key.id_target, key.id_reason))
                    .one(self.db)
                    .await
            }

            async fn to_reports(
                &self,
                rows: Vec<entity::$table::Model>,
            ) -> Result<Vec<$crate::server::model::report::Report>, $crate::server::error::AppError>
            {
                let names =
                    $crate::server::data::report::reason_names(self.db, rows.iter().map(|r| r.id_reason).collect())
                        .await?;

                Ok(rows
                    .into_iter()
                    .map(|r| $crate::server::model::report::Report {
                        key: $crate::server::model::report::ReportKey::new(
                            r.id_user,
                            r.$target_id,
                            r.id_reason,
                        ),
                        reason: names.get(&r.id_reason).cloned().unwrap_or_default(),
                        description: r.description,
                        reported_at: r.reported_at,
                        viewed: r.viewed,
                    })
                    .collect())
            }
        }
    };
}

report_repository!(
    PostCommentReportRepository,
    report_comment_post,
    ReportCommentPost,
    CommentPost,
    id_comment,
    "post comment"
);
report_repository!(
    ArticleCommentReportRepository,
    report_comment_article,
    ReportCommentArticle,
    CommentArticle,
    id_comment,
    "article comment"
);
report_repository!(
    PostReportRepository,
    report_post,
    ReportPost,
    Post,
    id_post,
    "post"
);
report_repository!(
    ProfileCommentReportRepository,
    report_profile_comment,
    ReportProfileComment,
    ProfileComment,
    id_profile_comment,
    "profile comment"
);
