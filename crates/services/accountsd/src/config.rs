//! Listener configuration.

use std::{fmt::Display, net::SocketAddr, time::Duration};

use crate::prelude::*;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Upper bound on the time spent serving a single request.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Reads `ACCOUNTS_ADDR` (default `0.0.0.0:3000`) and
    /// `REQUEST_TIMEOUT_SECS` (default 30).
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var("ACCOUNTS_ADDR").unwrap_or_else(|_| String::from(DEFAULT_ADDR));
        let addr = addr
            .trim()
            .parse()
            .map_err(|_| Error::EnvInvalid("ACCOUNTS_ADDR"))?;

        let request_timeout = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(Error::EnvInvalid("REQUEST_TIMEOUT_SECS")),
            },
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            addr,
            request_timeout,
        })
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "addr={} request_timeout={}s",
            self.addr,
            self.request_timeout.as_secs()
        )
    }
}
