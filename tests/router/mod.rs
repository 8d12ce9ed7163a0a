//! End-to-end tests driving the full router, including body parsing and middleware.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use holocron::server::router::routes;
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, body_text, json_request, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.app_state())
}

#[tokio::test]
/// Expect registration to succeed once, then conflict on the same email
async fn registers_each_email_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);
    let payload = json!({ "email": "a@b.com", "password": "x" });

    let first = app
        .clone()
        .oneshot(json_request(Method::POST, "/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["msg"], "User created successfully");

    let second = app
        .oneshot(json_request(Method::POST, "/register", payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(second).await["msg"], "User already exists");

    Ok(())
}

#[tokio::test]
/// Expect a token from login after registering through the router
async fn logs_in_after_registering() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);
    let payload = json!({ "email": "a@b.com", "password": "x" });

    let registered = app
        .clone()
        .oneshot(json_request(Method::POST, "/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::OK);

    let resp = app
        .oneshot(json_request(Method::POST, "/login", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[tokio::test]
/// Expect GET with a JSON body to create a planet, then conflict on repeat
async fn creates_planet_with_get() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);
    let payload = json!({
        "name": "Tatooine",
        "diameter": 10465,
        "population": 200000,
        "terrain": "desert"
    });

    let first = app
        .clone()
        .oneshot(json_request(Method::GET, "/planetas", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let planets = entity::prelude::Planet::find().count(&test.db).await?;
    assert_eq!(planets, 1);

    let second = app
        .oneshot(json_request(Method::GET, "/planetas", payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    let planets = entity::prelude::Planet::find().count(&test.db).await?;
    assert_eq!(planets, 1);

    Ok(())
}

#[tokio::test]
/// Expect POST to create a character
async fn creates_character_with_post() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/personajes",
            json!({
                "name": "Luke",
                "gender": "male",
                "hair_color": "blond",
                "eye_color": "blue"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["msg"],
        "personajes created successfully"
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 with a message body when the request body isn't valid JSON
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["msg"].as_str().is_some_and(|m| !m.is_empty()));

    Ok(())
}

#[tokio::test]
/// Expect 204 from the favorite lookup through the router
async fn finds_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("a@b.com")
        .with_mock_favorite(0, "personaje", 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::GET,
            "/favoritos",
            json!({ "User_id": 1, "tipoFavorito": "personaje", "favoritoId": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect the sitemap to link every GET endpoint and the API docs
async fn serves_sitemap() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    for path in ["/user", "/personajes", "/planetas", "/favoritos", "/api/docs"] {
        assert!(html.contains(&format!("href=\"{path}\"")), "missing {path}");
    }
    assert!(!html.contains("href=\"/register\""));

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to describe the registered paths
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let req = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    for path in ["/user", "/register", "/login", "/personajes", "/planetas", "/favoritos"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }

    Ok(())
}

#[tokio::test]
/// Expect cross-origin requests to be allowed from any origin
async fn allows_any_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let req = Request::builder()
        .uri("/user")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    Ok(())
}
