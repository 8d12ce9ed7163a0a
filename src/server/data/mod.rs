//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per entity.
//! They return raw SeaORM models & errors; business rules live in the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
