//! Password hashing and verification using Argon2.
//!
//! Hashes are PHC strings: the algorithm, cost parameters and salt travel with
//! the hash, so verification always uses the parameters the hash was created
//! with, regardless of how the current [`SecretHasher`] is configured.
//!
//! # Examples
//!
//! ```rust
//! use accounts_auth::secret_hash::{HashConfig, SecretHasher};
//!
//! let hasher = SecretHasher::new(&HashConfig::default()).unwrap();
//! let hash = hasher.hash("user_password_123").unwrap();
//!
//! assert!(hasher.verify("user_password_123", &hash).unwrap());
//! assert!(!hasher.verify("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// One-way password hasher.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    params: Params,
}

impl SecretHasher {
    /// Creates a hasher with the given cost parameters.
    ///
    /// Fails with [`Error::HashParams`] if the parameters are out of the range
    /// Argon2 accepts (e.g. memory below `8 * parallelism` KiB).
    pub fn new(config: &HashConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(Error::HashParams)?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `pw` with a freshly generated salt.
    pub fn hash(&self, pw: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self.argon2().hash_password(pw.as_bytes(), &salt)?.to_string())
    }

    /// Checks `pw` against a stored hash.
    ///
    /// A mismatch is `Ok(false)`. Only a hash that cannot be parsed yields
    /// [`Error::InvalidHashFormat`].
    pub fn verify(&self, pw: &str, hash: &str) -> Result<bool> {
        let hash = PasswordHashString::new(hash).map_err(|_| Error::InvalidHashFormat)?;

        match self.argon2().verify_password(pw.as_bytes(), &hash.password_hash()) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}
