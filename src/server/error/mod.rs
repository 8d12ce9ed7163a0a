//! Error types for the Holocron server.
//!
//! Request-time errors (authentication, request validation) live in their own modules and
//! are aggregated into [`Error`]. [`config::ConfigError`] is only raised before the server
//! starts and is reported by `main`. Every [`Error`] converts into an Axum response
//! carrying a [`MessageDto`] body, so handlers can simply propagate with `?`.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, request::RequestError},
};

/// Main error type for the Holocron server.
///
/// # Error Categories
/// - Authentication errors (credentials, password hashing)
/// - Request errors (missing fields, malformed bodies, conflicts)
/// - External library errors (database, token signing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (invalid credentials, password hashing).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request error (missing field, malformed body, resource already exists).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing or validation error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::RequestError(RequestError::InvalidBody(rejection))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
