//! Planet creation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, catalog::PlanetDto},
    server::{
        controller::{util::require::require, CATALOG_TAG},
        error::Error,
        model::{app::AppState, catalog::PlanetAttributes},
        service::planet::PlanetService,
    },
};

/// Add a planet to the catalogue
///
/// Accepts `GET` for compatibility with existing clients as well as `POST`.
///
/// # Responses
/// - 200 (OK): Planet created
/// - 400 (Bad Request): A required attribute is missing, or body is not JSON
/// - 401 (Unauthorized): A planet with identical attributes already exists
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    method(get, post),
    path = "/planetas",
    tag = CATALOG_TAG,
    request_body = PlanetDto,
    responses(
        (status = 200, description = "Planet created", body = MessageDto),
        (status = 400, description = "Missing attribute", body = MessageDto),
        (status = 401, description = "Planet already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<PlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(planet) = payload?;

    let attributes = PlanetAttributes {
        name: require(planet.name, "Name")?,
        diameter: require(planet.diameter, "diameter")?,
        population: require(planet.population, "population")?,
        terrain: require(planet.terrain, "terrain")?,
    };

    PlanetService::new(&state.db).create(attributes).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("planetas created successfully")),
    ))
}
