//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::error::InternalServerError};

/// Errors raised while registering or logging in users
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password, reported identically (401)
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Argon2 failed to hash a password or parse a stored hash (500)
    #[error("Failed to hash or verify password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(MessageDto::new(self.to_string())),
                )
                    .into_response()
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
