use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report_comment_post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_user: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_comment: i32,
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
        belongs_to = "super::comment_post::Entity",
        from = "Column::IdComment",
        to = "super::comment_post::Column::Id",
        on_delete = "Cascade"
    )]
    CommentPost,
    #[sea_orm(
        belongs_to = "super::reason::Entity",
        from = "Column::IdReason",
        to = "super::reason::Column::Id",
        on_delete = "Cascade"
    )]
    Reason,
}

impl ActiveModelBehavior for ActiveModel {}
