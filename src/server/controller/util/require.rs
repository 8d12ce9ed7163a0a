//! Required-field validation for request DTOs.

use crate::server::error::request::RequestError;

/// Takes a required request field, failing with its name when absent
///
/// # Arguments
/// - `value`: The deserialized field, `None` when missing or `null`
/// - `field`: Field name reported back to the client
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, RequestError> {
    value.ok_or(RequestError::MissingField(field))
}
