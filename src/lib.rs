//! Holocron: a REST API for a Star Wars catalogue of characters, planets and user favorites.

pub mod model;
pub mod server;
