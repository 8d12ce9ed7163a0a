//! Configuration errors raised while reading the environment at startup.

use thiserror::Error;

/// Errors reading the server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set to a value that can't be used
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
