use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{error::AppError, model::report::Reason};

pub struct ReasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Reason>, AppError> {
        let reasons = entity::prelude::Reason::find()
            .order_by_asc(entity::reason::Column::Id)
            .all(self.db)
            .await?;

        Ok(reasons.into_iter().map(Reason::from_entity).collect())
    }

    pub async fn create(&self, name: String) -> Result<Reason, AppError> {
        let reason = entity::reason::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reason::from_entity(reason))
    }

    /// Deletes a reason together with every report that cites it.
    pub async fn delete(&self, id: i32) -> Result<Option<()>, AppError> {
        if entity::prelude::Reason::find_by_id(id).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let txn = self.db.begin().await?;
        entity::prelude::ReportPost::delete_many()
            .filter(entity::report_post::Column::IdReason.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ReportCommentPost::delete_many()
            .filter(entity::report_comment_post::Column::IdReason.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ReportCommentArticle::delete_many()
            .filter(entity::report_comment_article::Column::IdReason.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ReportProfileComment::delete_many()
            .filter(entity::report_profile_comment::Column::IdReason.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ReportUser::delete_many()
            .filter(entity::report_user::Column::IdReason.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Reason::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Some(()))
    }
}
