//! Service layer for business logic.
//!
//! Services enforce the rules around persistence: uniqueness checks before inserts,
//! password hashing & verification, and access token issuing. Controllers call services,
//! services call repositories.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
