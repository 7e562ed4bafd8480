use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_user_reported: i32,
    pub id_user_reporting: i32,
    pub id_reason: i32,
    pub description: String,
    pub reported_at: DateTimeUtc,
    pub viewed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::IdUserReported",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Reported,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::IdUserReporting",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Reporting,
    #[sea_orm(
        belongs_to = "super::reason::Entity",
        from = "Column::IdReason",
        to = "super::reason::Column::Id",
        on_delete = "Cascade"
    )]
    Reason,
}

impl ActiveModelBehavior for ActiveModel {}
