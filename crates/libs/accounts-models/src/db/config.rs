//! Database configuration management.

use std::fmt::Display;

use crate::prelude::*;

/// Database connection configuration.
pub struct DbConfig {
    /// PostgreSQL database URL.
    pub database_url: String,
}

fn get_env_variable(var: &'static str) -> Result<String> {
    std::env::var(var).map_err(|_| Error::EnvMissing(var))
}

impl DbConfig {
    /// Create database configuration from environment variables.
    ///
    /// Reads the `DATABASE_URL` environment variable.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use accounts_models::db::config::DbConfig;
    ///
    /// let config = DbConfig::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: get_env_variable("DATABASE_URL")?,
        })
    }
}

impl Display for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "REDACTED")
    }
}
