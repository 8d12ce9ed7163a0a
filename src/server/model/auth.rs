//! Access token signing keys & claims.

use chrono::TimeDelta;
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

/// HS256 signing material & lifetime for access tokens
#[derive(Clone)]
pub struct TokenKeys {
    /// Key signing issued tokens
    pub encoding: EncodingKey,
    /// Key validating presented tokens
    pub decoding: DecodingKey,
    /// Lifetime of issued tokens
    pub expiry: TimeDelta,
}

impl TokenKeys {
    /// Access token lifetime used when `JWT_ACCESS_TOKEN_EXPIRES` is unset
    pub const DEFAULT_EXPIRY_SECONDS: i64 = 900;

    /// Derives both keys from a shared secret
    ///
    /// A lifetime beyond what [`TimeDelta`] can hold saturates; issuing a token with it fails
    /// instead of panicking.
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry: TimeDelta::try_seconds(expiry_seconds).unwrap_or(TimeDelta::MAX),
        }
    }
}

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the user the token was issued to
    pub sub: String,
    /// Issued at, seconds since the unix epoch
    pub iat: i64,
    /// Expiry, seconds since the unix epoch
    pub exp: i64,
}
