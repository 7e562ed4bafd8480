use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::{
        actor::Actor,
        link::{LinkPlatform, Links},
    },
    util::authorizer::ensure_self_or_admin,
};

pub struct LinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every platform link of a user; `None` when the user does not exist.
    pub async fn get(&self, id_user: i32) -> Result<Option<Links>, AppError> {
        Ok(entity::prelude::User::find_by_id(id_user)
            .one(self.db)
            .await?
            .map(|user| Links::from_entity(&user)))
    }

    /// Sets or, with `None`, clears one platform link.
    ///
    /// # Returns
    /// - `Ok(Some(Links))` - All links of the user after the change
    /// - `Ok(None)` - User not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the user nor an admin
    pub async fn set(
        &self,
        id_user: i32,
        platform: LinkPlatform,
        link: Option<String>,
        actor: &Actor,
    ) -> Result<Option<Links>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id_user).one(self.db).await? else {
            return Ok(None);
        };

        ensure_self_or_admin(actor, id_user)?;

        let mut active: entity::user::ActiveModel = user.into();
        let value = ActiveValue::Set(link);
        match platform {
            LinkPlatform::Steam => active.steam_link = value,
            LinkPlatform::Discord => active.discord_link = value,
            LinkPlatform::Xbox => active.xbox_link = value,
            LinkPlatform::Ps => active.ps_link = value,
            LinkPlatform::Epic => active.epic_link = value,
        }
        let user = active.update(self.db).await?;

        Ok(Some(Links::from_entity(&user)))
    }
}
