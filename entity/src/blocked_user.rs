use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blocked_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_user: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_user_blocked: i32,
    pub comment: Option<String>,
    pub blocked_at: DateTimeUtc,
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
        belongs_to = "super::user::Entity",
        from = "Column::IdUserBlocked",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    UserBlocked,
}

impl ActiveModelBehavior for ActiveModel {}
