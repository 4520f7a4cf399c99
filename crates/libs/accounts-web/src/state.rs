//! Process-wide state shared by every request.

use std::sync::Arc;

use accounts_auth::{jwt::JwtKeys, secret_hash::SecretHasher};
use accounts_models::repository::UserRepository;
use chrono::TimeDelta;

use crate::{config::AuthConfig, prelude::*};

/// Plaintext behind [`ApiState::dummy_hash`].
pub(crate) const DUMMY_PASSWORD: &str = "accounts-dummy-password";

/// Handles built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct ApiState {
    /// User store.
    pub repository: Arc<dyn UserRepository>,
    /// Password hasher.
    pub hasher: SecretHasher,
    /// Token signing and verification keys.
    pub keys: Arc<JwtKeys>,
    /// Lifetime of issued access tokens.
    pub token_ttl: TimeDelta,
    /// Hash verified when a login names an unknown email.
    pub dummy_hash: Arc<str>,
}

impl ApiState {
    /// Builds the state from a repository and the auth configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use accounts_models::db::{config::DbConfig, connection::DbConnection};
    /// use accounts_web::{config::AuthConfig, state::ApiState};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = DbConnection::new(&DbConfig::from_env()?)?.setup()?;
    /// let state = ApiState::new(Arc::new(db), &AuthConfig::from_env()?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(repository: Arc<dyn UserRepository>, config: &AuthConfig) -> Result<Self> {
        let hasher = SecretHasher::new(&config.hash)?;
        let dummy_hash = Arc::from(hasher.hash(DUMMY_PASSWORD)?);

        Ok(Self {
            repository,
            hasher,
            keys: Arc::new(JwtKeys::new(config.secret.as_bytes())),
            token_ttl: config.token_ttl,
            dummy_hash,
        })
    }
}
