use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_rank: i32,
    #[sea_orm(unique)]
    pub nick: String,
    pub password: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeUtc,
    #[sea_orm(column_type = "Blob", nullable)]
    pub photo: Option<Vec<u8>>,
    pub photo_type: Option<String>,
    pub steam_link: Option<String>,
    pub discord_link: Option<String>,
    pub xbox_link: Option<String>,
    pub ps_link: Option<String>,
    pub epic_link: Option<String>,
    pub refresh_token: Option<String>,
    pub refresh_token_exp: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rank::Entity",
        from = "Column::IdRank",
        to = "super::rank::Column::Id"
    )]
    Rank,
}

impl Related<super::rank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
