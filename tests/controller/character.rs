use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{model::catalog::CharacterDto, server::controller::character::create_character};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{body_json, TestContextExt};

fn luke() -> CharacterDto {
    CharacterDto {
        name: Some("Luke".to_string()),
        gender: Some("male".to_string()),
        hair_color: Some("blond".to_string()),
        eye_color: Some("blue".to_string()),
    }
}

#[tokio::test]
/// Expect 200 success and a stored row for a new character
async fn returns_success_for_new_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_character(State(test.app_state()), Ok(Json(luke()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "personajes created successfully");
    let characters = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(characters, 1);

    Ok(())
}

#[tokio::test]
/// Expect 401 when the exact attribute combination already exists
async fn returns_unauthorized_for_existing_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Luke", "male", "blond", "blue")
        .build()
        .await?;

    let result = create_character(State(test.app_state()), Ok(Json(luke()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "personajes already exists");
    let characters = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(characters, 1);

    Ok(())
}

#[tokio::test]
/// Expect a differing attribute to count as a new character
async fn creates_character_differing_in_one_attribute() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Luke", "male", "blond", "brown")
        .build()
        .await?;

    let result = create_character(State(test.app_state()), Ok(Json(luke()))).await;

    assert!(result.is_ok());
    let characters = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(characters, 2);

    Ok(())
}

#[tokio::test]
/// Expect 400 naming each missing field, with nothing stored
async fn returns_bad_request_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let cases = [
        (CharacterDto { name: None, ..luke() }, "No Name was provided"),
        (CharacterDto { gender: None, ..luke() }, "No gender was provided"),
        (
            CharacterDto {
                hair_color: None,
                ..luke()
            },
            "No hair_color was provided",
        ),
        (
            CharacterDto {
                eye_color: None,
                ..luke()
            },
            "No eye_color was provided",
        ),
    ];

    for (payload, expected) in cases {
        let result = create_character(State(test.app_state()), Ok(Json(payload))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["msg"], expected);
    }

    let characters = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(characters, 0);

    Ok(())
}
