//! Authentication configuration.

use std::fmt::Display;
use std::str::FromStr;

use accounts_auth::secret_hash::HashConfig;
use chrono::TimeDelta;

use crate::prelude::*;

/// Default lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: TimeDelta = TimeDelta::hours(1);

/// Secrets and cost parameters for credential handling.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign access tokens.
    pub secret: String,
    /// Lifetime of issued access tokens.
    pub token_ttl: TimeDelta,
    /// Password hashing cost.
    pub hash: HashConfig,
}

fn get_env_variable(var: &'static str) -> Result<String> {
    std::env::var(var).map_err(|_| Error::EnvMissing(var))
}

fn parse_env_variable<T: FromStr>(var: &'static str, default: T) -> Result<T> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| Error::EnvInvalid(var)),
        Err(_) => Ok(default),
    }
}

impl AuthConfig {
    /// Creates a configuration, rejecting an empty secret.
    pub fn new(secret: String, token_ttl: TimeDelta, hash: HashConfig) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::EmptySecret);
        }
        Ok(Self {
            secret,
            token_ttl,
            hash,
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// - `SECRET_KEY` (required, non-empty)
    /// - `TOKEN_TTL_SECS` (default 3600)
    /// - `HASH_MEMORY_KIB`, `HASH_ITERATIONS`, `HASH_PARALLELISM` (Argon2 defaults)
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use accounts_web::config::AuthConfig;
    ///
    /// let config = AuthConfig::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self> {
        let defaults = HashConfig::default();
        let hash = HashConfig {
            memory_kib: parse_env_variable("HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_env_variable("HASH_ITERATIONS", defaults.iterations)?,
            parallelism: parse_env_variable("HASH_PARALLELISM", defaults.parallelism)?,
        };
        let ttl_secs = parse_env_variable("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL.num_seconds())?;
        let token_ttl = TimeDelta::try_seconds(ttl_secs)
            .filter(|ttl| *ttl > TimeDelta::zero())
            .ok_or(Error::EnvInvalid("TOKEN_TTL_SECS"))?;

        Self::new(get_env_variable("SECRET_KEY")?, token_ttl, hash)
    }
}

impl Display for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "secret=REDACTED token_ttl={}s hash=argon2id(m={}, t={}, p={})",
            self.token_ttl.num_seconds(),
            self.hash.memory_kib,
            self.hash.iterations,
            self.hash.parallelism
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "SECRET_KEY",
        "TOKEN_TTL_SECS",
        "HASH_MEMORY_KIB",
        "HASH_ITERATIONS",
        "HASH_PARALLELISM",
    ];

    fn with_env(vars: &[(&str, &str)], test: impl FnOnce()) {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            for var in VARS {
                std::env::remove_var(var);
            }
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }
        test();
        unsafe {
            for var in VARS {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        with_env(&[("SECRET_KEY", "s3cret")], || {
            let config = AuthConfig::from_env().unwrap();
            assert_eq!(config.secret, "s3cret");
            assert_eq!(config.token_ttl, TimeDelta::hours(1));
            assert_eq!(config.hash, HashConfig::default());
        });
    }

    #[test]
    #[serial]
    fn test_missing_secret() {
        with_env(&[], || {
            assert!(matches!(
                AuthConfig::from_env(),
                Err(Error::EnvMissing("SECRET_KEY"))
            ));
        });
    }

    #[test]
    #[serial]
    fn test_empty_secret() {
        with_env(&[("SECRET_KEY", "")], || {
            assert!(matches!(AuthConfig::from_env(), Err(Error::EmptySecret)));
        });
    }

    #[test]
    #[serial]
    fn test_overrides() {
        with_env(
            &[
                ("SECRET_KEY", "s3cret"),
                ("TOKEN_TTL_SECS", "60"),
                ("HASH_MEMORY_KIB", "64"),
                ("HASH_ITERATIONS", "3"),
                ("HASH_PARALLELISM", "2"),
            ],
            || {
                let config = AuthConfig::from_env().unwrap();
                assert_eq!(config.token_ttl, TimeDelta::seconds(60));
                assert_eq!(
                    config.hash,
                    HashConfig {
                        memory_kib: 64,
                        iterations: 3,
                        parallelism: 2,
                    }
                );
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_ttl() {
        for ttl in ["abc", "0", "-5", "9223372036854775807"] {
            with_env(&[("SECRET_KEY", "s3cret"), ("TOKEN_TTL_SECS", ttl)], || {
                assert!(matches!(
                    AuthConfig::from_env(),
                    Err(Error::EnvInvalid("TOKEN_TTL_SECS"))
                ));
            });
        }
    }

    #[test]
    fn test_display_redacts_secret() {
        let config =
            AuthConfig::new(String::from("s3cret"), DEFAULT_TOKEN_TTL, HashConfig::default())
                .unwrap();
        assert!(!config.to_string().contains("s3cret"));
    }
}
