//! Social platform links shown on a user's profile.

use serde::Deserialize;

use crate::model::link::LinksDto;

/// Platform a profile link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPlatform {
    Steam,
    Discord,
    Xbox,
    Ps,
    Epic,
}

/// All platform links of one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links {
    pub steam: Option<String>,
    pub discord: Option<String>,
    pub xbox: Option<String>,
    pub ps: Option<String>,
    pub epic: Option<String>,
}

impl Links {
    pub fn from_entity(user: &entity::user::Model) -> Self {
        Self {
            steam: user.steam_link.clone(),
            discord: user.discord_link.clone(),
            xbox: user.xbox_link.clone(),
            ps: user.ps_link.clone(),
            epic: user.epic_link.clone(),
        }
    }

    pub fn into_dto(self) -> LinksDto {
        LinksDto {
            steam: self.steam,
            discord: self.discord,
            xbox: self.xbox,
            ps: self.ps,
            epic: self.epic,
        }
    }
}
