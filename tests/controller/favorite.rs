use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{model::catalog::FavoriteQueryDto, server::controller::favorite::find_favorite};
use holocron_test_utils::prelude::*;

use crate::util::TestContextExt;

fn query(user_id: Option<i32>, kind: Option<&str>, favorite_id: Option<i32>) -> FavoriteQueryDto {
    FavoriteQueryDto {
        user_id,
        kind: kind.map(str::to_string),
        favorite_id,
    }
}

#[tokio::test]
/// Expect 204 when the favorite exists
async fn returns_no_content_for_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("a@b.com")
        .with_mock_favorite(0, "planeta", 3)
        .build()
        .await?;

    let result = find_favorite(
        State(test.app_state()),
        Ok(Json(query(Some(1), Some("planeta"), Some(3)))),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 204 when no favorite matches
async fn returns_no_content_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = find_favorite(
        State(test.app_state()),
        Ok(Json(query(Some(1), Some("planeta"), Some(3)))),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 204 without touching the database when a field is absent
async fn skips_lookup_when_fields_are_missing() -> Result<(), TestError> {
    // No tables, so any lookup would fail with 500
    let test = TestBuilder::new().build().await?;

    let cases = [
        query(None, Some("planeta"), Some(3)),
        query(Some(1), None, Some(3)),
        query(Some(1), Some("planeta"), None),
        query(None, None, None),
    ];

    for payload in cases {
        let result = find_favorite(State(test.app_state()), Ok(Json(payload))).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);
    }

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the favorite table doesn't exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = find_favorite(
        State(test.app_state()),
        Ok(Json(query(Some(1), Some("planeta"), Some(3)))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
