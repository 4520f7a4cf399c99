use std::sync::Arc;

use accounts_auth::secret_hash::HashConfig;
use accounts_models::memory::MemoryUserRepository;

use crate::{
    config::{AuthConfig, DEFAULT_TOKEN_TTL},
    state::ApiState,
};

/// State over an empty in-memory store with cheap hashing.
pub fn test_state() -> ApiState {
    let config = AuthConfig::new(
        String::from("test-secret"),
        DEFAULT_TOKEN_TTL,
        HashConfig {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
    )
    .unwrap();
    ApiState::new(Arc::new(MemoryUserRepository::new()), &config).unwrap()
}
