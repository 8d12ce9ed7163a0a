//! SeaORM entities for the Holocron schema.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod holocron_user;
pub mod planet;
