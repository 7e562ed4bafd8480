use sea_orm::DatabaseConnection;

use super::service::token::TokenService;

/// Resources every handler reaches through `State<AppState>`.
///
/// Cloned per request. The connection clone shares the pool and the token
/// service keeps its keys behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Issues tokens at login and refresh, verifies them in `AuthGuard`.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
