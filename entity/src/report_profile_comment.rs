use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report_profile_comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_user: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_profile_comment: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_reason: i32,
    pub description: String,
    pub reported_at: DateTimeUtc,
    pub viewed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::IdUser",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::profile_comment::Entity",
        from = "Column::IdProfileComment",
        to = "super::profile_comment::Column::Id",
        on_delete = "Cascade"
    )]
    ProfileComment,
    #[sea_orm(
        belongs_to = "super::reason::Entity",
        from = "Column::IdReason",
        to = "super::reason::Column::Id",
        on_delete = "Cascade"
    )]
    Reason,
}

impl ActiveModelBehavior for ActiveModel {}
