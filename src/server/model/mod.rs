//! Server application models and type definitions.
//!
//! This module contains the application state handed to every request handler, the token
//! signing material & claims used for authentication, database model type aliases, and the
//! validated attribute sets passed from controllers to services.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod db;
