use serde::{Deserialize, Serialize};

/// Email & password submitted to register or login
///
/// Both fields are optional at the deserialization level so that a missing field
/// can be reported by name instead of as a malformed body.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CredentialsDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Access token returned after a successful login
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}
