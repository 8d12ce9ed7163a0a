//! Environment-based server configuration.

use chrono::{TimeDelta, Utc};

use crate::server::{error::config::ConfigError, model::auth::TokenKeys};

const DEFAULT_PORT: u16 = 3000;

/// Server configuration read from environment variables
pub struct Config {
    /// Database connection string from `DB_CONNECTION_STRING`
    pub database_url: String,
    /// HS256 signing secret from `JWT_SECRET_KEY`
    pub jwt_secret_key: String,
    /// Access token lifetime from `JWT_ACCESS_TOKEN_EXPIRES`
    pub jwt_expiry_seconds: i64,
    /// Listening port from `PORT`
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration using the provided variable lookup
    ///
    /// # Arguments
    /// - `lookup`: Returns the value of an environment variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)`: All required variables present & valid
    /// - `Err(ConfigError::MissingEnvVar)`: `DB_CONNECTION_STRING` or `JWT_SECRET_KEY` not set
    /// - `Err(ConfigError::InvalidEnvValue)`: A variable is set but can't be used
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let database_url = required("DB_CONNECTION_STRING")?;

        let jwt_secret_key = required("JWT_SECRET_KEY")?;
        if jwt_secret_key.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET_KEY".to_string(),
                reason: "secret must not be empty".to_string(),
            });
        }

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_expiry_seconds = match lookup("JWT_ACCESS_TOKEN_EXPIRES") {
            Some(value) => {
                let seconds = value
                    .parse::<i64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "JWT_ACCESS_TOKEN_EXPIRES".to_string(),
                        reason: e.to_string(),
                    })?;

                if seconds <= 0 {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "JWT_ACCESS_TOKEN_EXPIRES".to_string(),
                        reason: "lifetime must be a positive number of seconds".to_string(),
                    });
                }

                // Tokens issued now must still carry a representable expiry
                let expiry = TimeDelta::try_seconds(seconds)
                    .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
                if expiry.is_none() {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "JWT_ACCESS_TOKEN_EXPIRES".to_string(),
                        reason: "lifetime is too large".to_string(),
                    });
                }

                seconds
            }
            None => TokenKeys::DEFAULT_EXPIRY_SECONDS,
        };

        Ok(Self {
            database_url,
            jwt_secret_key,
            jwt_expiry_seconds,
            port,
        })
    }
}
