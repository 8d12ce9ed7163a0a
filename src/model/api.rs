use serde::{Deserialize, Serialize};

/// Message body returned by successful create requests and by every error response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
