//! Client request errors: missing fields, malformed bodies & conflicts.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Errors caused by the client's request, answered with a 4xx status
#[derive(Error, Debug)]
pub enum RequestError {
    /// A required JSON field was absent or `null`
    #[error("No {0} was provided")]
    MissingField(&'static str),
    /// The request body could not be read as the expected JSON object
    #[error("Request body must be a JSON object: {0}")]
    InvalidBody(JsonRejection),
    /// A record with identical attributes is already stored
    #[error("{0} already exists")]
    AlreadyExists(&'static str),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        // Conflicts keep answering 401 for compatibility with existing clients
        let status = match self {
            Self::MissingField(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists(_) => StatusCode::UNAUTHORIZED,
        };

        (status, Json(MessageDto::new(self.to_string()))).into_response()
    }
}
