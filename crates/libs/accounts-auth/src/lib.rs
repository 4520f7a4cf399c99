//! Credential hashing and signed token primitives for the accounts service.
//!
//! - [`secret_hash`]: Argon2 password hashing and verification.
//! - [`jwt`]: HS256 token signing and verification with an injected secret.

pub mod error;
pub mod jwt;
pub mod prelude;
pub mod secret_hash;

/// Name of the HTTP header carrying bearer tokens.
pub const AUTH_HEADER: &str = "Authorization";
/// Authentication scheme expected in [`AUTH_HEADER`].
pub const AUTH_SCHEME: &str = "Bearer";
