use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{model::catalog::PlanetDto, server::controller::planet::create_planet};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{body_json, TestContextExt};

fn tatooine() -> PlanetDto {
    PlanetDto {
        name: Some("Tatooine".to_string()),
        diameter: Some(10465),
        population: Some(200000),
        terrain: Some("desert".to_string()),
    }
}

#[tokio::test]
/// Expect 200 on first creation, then 401 with the row count unchanged
async fn creates_planet_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let first = create_planet(State(test.app_state()), Ok(Json(tatooine()))).await;

    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "planetas created successfully");
    let planets = entity::prelude::Planet::find().count(&test.db).await?;
    assert_eq!(planets, 1);

    let second = create_planet(State(test.app_state()), Ok(Json(tatooine()))).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "planetas already exists");
    let planets = entity::prelude::Planet::find().count(&test.db).await?;
    assert_eq!(planets, 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 naming each missing field
async fn returns_bad_request_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let cases = [
        (PlanetDto { name: None, ..tatooine() }, "No Name was provided"),
        (
            PlanetDto {
                diameter: None,
                ..tatooine()
            },
            "No diameter was provided",
        ),
        (
            PlanetDto {
                population: None,
                ..tatooine()
            },
            "No population was provided",
        ),
        (
            PlanetDto {
                terrain: None,
                ..tatooine()
            },
            "No terrain was provided",
        ),
    ];

    for (payload, expected) in cases {
        let result = create_planet(State(test.app_state()), Ok(Json(payload))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["msg"], expected);
    }

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the planet table doesn't exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_planet(State(test.app_state()), Ok(Json(tatooine()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
