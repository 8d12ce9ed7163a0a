//! Shared application state.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, model::auth::TokenKeys};

/// State shared with every request handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Keys & lifetime for access tokens
    pub tokens: TokenKeys,
}

impl AppState {
    /// Builds application state from the loaded configuration & an open database connection
    pub fn new(config: &Config, db: DatabaseConnection) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(&config.jwt_secret_key, config.jwt_expiry_seconds),
        }
    }
}

/// Builds state from a database connection & signing secret using the default token lifetime
///
/// Allows test utilities to construct [`AppState`] without depending on this crate.
impl From<(DatabaseConnection, &str)> for AppState {
    fn from((db, secret): (DatabaseConnection, &str)) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(secret, TokenKeys::DEFAULT_EXPIRY_SECONDS),
        }
    }
}
