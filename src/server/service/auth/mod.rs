//! Authentication services.
//!
//! Registration stores users with Argon2id password hashes; login verifies a password
//! against the stored hash and issues an HS256 access token for the user.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, request::RequestError, Error},
    model::{auth::TokenKeys, db::UserModel},
    service::auth::{
        password::{hash_password, verify_password},
        token::issue_token,
    },
    util::db::conflict_on_unique_violation,
};

static USER_RESOURCE: &str = "User";

/// Service for registering users & logging them in.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(UserModel)`: User created
    /// - `Err(Error::RequestError(RequestError::AlreadyExists))`: Email already registered
    /// - `Err(Error)`: Database or hashing failure
    pub async fn register(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.find_by_email(email).await?.is_some() {
            return Err(RequestError::AlreadyExists(USER_RESOURCE).into());
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))??;

        // Another request may have registered the email since the lookup above
        let user = user_repository
            .create(email, &password_hash)
            .await
            .map_err(|err| conflict_on_unique_violation(err, USER_RESOURCE))?;

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(user)
    }

    /// Verifies credentials & issues an access token.
    ///
    /// # Returns
    /// - `Ok(String)`: Signed access token for the user
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))`: Unknown email or wrong password
    /// - `Err(Error)`: Database, hashing or signing failure
    pub async fn login(&self, email: &str, password: &str) -> Result<String, Error> {
        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    Error::InternalError(format!("Password verification task failed: {}", e))
                })??;

        if !verified {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");

            return Err(AuthError::InvalidCredentials.into());
        }

        issue_token(self.tokens, user.id)
    }
}
