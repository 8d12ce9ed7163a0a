//! Character creation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, catalog::CharacterDto},
    server::{
        controller::{util::require::require, CATALOG_TAG},
        error::Error,
        model::{app::AppState, catalog::CharacterAttributes},
        service::character::CharacterService,
    },
};

/// Add a character to the catalogue
///
/// Accepts `GET` for compatibility with existing clients as well as `POST`.
///
/// # Responses
/// - 200 (OK): Character created
/// - 400 (Bad Request): A required attribute is missing, or body is not JSON
/// - 401 (Unauthorized): A character with identical attributes already exists
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    method(get, post),
    path = "/personajes",
    tag = CATALOG_TAG,
    request_body = CharacterDto,
    responses(
        (status = 200, description = "Character created", body = MessageDto),
        (status = 400, description = "Missing attribute", body = MessageDto),
        (status = 401, description = "Character already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(character) = payload?;

    let attributes = CharacterAttributes {
        name: require(character.name, "Name")?,
        gender: require(character.gender, "gender")?,
        hair_color: require(character.hair_color, "hair_color")?,
        eye_color: require(character.eye_color, "eye_color")?,
    };

    CharacterService::new(&state.db).create(attributes).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("personajes created successfully")),
    ))
}
