use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::actor::{Actor, Role},
    service::token::TokenService,
};

/// Set of roles an endpoint accepts.
///
/// An empty permission list passed to [`AuthGuard::require`] accepts any
/// authenticated user, blocked users included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Every role except `Blocked`
    Member,
    /// Administrators and moderators
    Staff,
    /// Administrators and redactors
    Redaction,
    Admin,
}

impl Permission {
    fn allows(self, role: Role) -> bool {
        match self {
            Self::Member => role != Role::Blocked,
            Self::Staff => matches!(role, Role::Admin | Role::Moderator),
            Self::Redaction => matches!(role, Role::Admin | Role::Redactor),
            Self::Admin => role == Role::Admin,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the bearer token and checks the caller's current role.
    ///
    /// The role is read from the user's rank in the database rather than from the
    /// token, so rank changes apply to tokens that were already issued.
    ///
    /// # Returns
    /// - `Ok(Actor)` - Caller id and role
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - Not authenticated
    /// - `Err(AuthError::AccessDenied)` - Role not allowed by every given permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Actor, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.decode(token)?;

        let user_repo = UserRepository::new(self.db);

        let Some((_, rank_name)) = user_repo.find_with_rank(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        let actor = Actor::new(claims.sub, Role::from_rank_name(&rank_name));

        for permission in permissions {
            if !permission.allows(actor.role) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!(
                        "User with role {} attempted an action requiring {:?}",
                        actor.role.as_str(),
                        permission
                    ),
                )
                .into());
            }
        }

        Ok(actor)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
