//! Database error classification.

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{request::RequestError, Error};

/// Whether a database error was caused by a unique constraint or unique index
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Maps an insert error to a conflict on `resource` when it violated a unique index
///
/// Covers duplicates inserted between a service's lookup and its insert. Any other
/// database error is passed through as [`Error::DbErr`].
pub fn conflict_on_unique_violation(err: DbErr, resource: &'static str) -> Error {
    if is_unique_violation(&err) {
        RequestError::AlreadyExists(resource).into()
    } else {
        err.into()
    }
}
