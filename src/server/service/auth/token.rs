//! HS256 access tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Header, Validation};

use crate::server::{
    error::Error,
    model::auth::{Claims, TokenKeys},
};

/// Issues a signed HS256 access token identifying the user
pub fn issue_token(keys: &TokenKeys, user_id: i32) -> Result<String, Error> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(keys.expiry)
        .ok_or_else(|| Error::InternalError("Access token expiry is out of range".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(&Header::default(), &claims, &keys.encoding)?;

    Ok(token)
}

/// Decodes an access token, validating its signature & expiry
pub fn decode_token(keys: &TokenKeys, token: &str) -> Result<Claims, Error> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;

    Ok(data.claims)
}
