//! Test utilities for Holocron.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables & fixtures, and its
//! `build()` call returns a [`TestContext`] wrapping an in-memory SQLite database that the
//! test then exercises.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD_HASH},
        TestBuilder, TestContext, TestError,
    };
}
