//! Test fixture modules for inserting database records during test execution.
//!
//! - `user` - Registered user accounts
//! - `catalog` - Characters & planets
//! - `favorite` - User favorites

pub mod catalog;
pub mod favorite;
pub mod user;
