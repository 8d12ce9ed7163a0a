use axum::{http::StatusCode, response::IntoResponse};
use holocron::server::controller::user::get_user;

use crate::util::body_json;

#[tokio::test]
/// Expect the fixed greeting with 200 success
async fn returns_greeting() {
    let resp = get_user().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "Hello, this is your GET /user response ");
}
