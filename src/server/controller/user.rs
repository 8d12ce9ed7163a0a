//! User endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// OpenAPI tag for user routes
pub static USER_TAG: &str = "user";

/// Greeting confirming the user API is reachable
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Static greeting", body = MessageDto)
    ),
)]
pub async fn get_user() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new("Hello, this is your GET /user response ")),
    )
}
