//! Report reason factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a report reason with a unique name.
pub async fn create_reason(db: &DatabaseConnection) -> Result<entity::reason::Model, DbErr> {
    entity::reason::ActiveModel {
        name: ActiveValue::Set(format!("Reason {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
