//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers extract the JSON body, check that every required field is present, call
//! into the service layer and shape the response. Errors are propagated with `?` and
//! converted into JSON responses by [`Error`](crate::server::error::Error).

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;

/// OpenAPI tag for character, planet & favorite routes
pub static CATALOG_TAG: &str = "catalog";
