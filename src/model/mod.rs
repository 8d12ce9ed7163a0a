//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod catalog;
pub mod user;
