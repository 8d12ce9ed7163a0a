//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to verify request validation,
//! response status codes & bodies, and error handling.

mod auth;
mod character;
mod favorite;
mod planet;
mod user;
