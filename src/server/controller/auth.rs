//! Registration & login endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        user::{CredentialsDto, TokenDto},
    },
    server::{
        controller::util::require::require, error::Error, model::app::AppState,
        service::auth::AuthService,
    },
};

/// OpenAPI tag for authentication routes
pub static AUTH_TAG: &str = "auth";

/// Register a new user with an email & password
///
/// # Responses
/// - 200 (OK): User created
/// - 400 (Bad Request): Email or password missing, or body is not JSON
/// - 401 (Unauthorized): A user with this email already exists
/// - 500 (Internal Server Error): Database or password hashing failure
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 400, description = "Missing email or password", body = MessageDto),
        (status = 401, description = "User already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = payload?;

    let email = require(credentials.email, "email")?;
    let password = require(credentials.password, "password")?;

    AuthService::new(&state.db, &state.tokens)
        .register(&email, &password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User created successfully")),
    ))
}

/// Log in with an email & password to receive an access token
///
/// # Responses
/// - 200 (OK): Credentials valid, body contains the access token
/// - 400 (Bad Request): Email or password missing, or body is not JSON
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database, hashing or token signing failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 400, description = "Missing email or password", body = MessageDto),
        (status = 401, description = "Invalid username or password", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = payload?;

    let email = require(credentials.email, "email")?;
    let password = require(credentials.password, "password")?;

    let token = AuthService::new(&state.db, &state.tokens)
        .login(&email, &password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
