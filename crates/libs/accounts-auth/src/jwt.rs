//! Signed token management.
//!
//! Tokens are three-part compact JWTs signed with HS256. The payload is only
//! signed, not encrypted: never put sensitive data in the claims.
//!
//! # Examples
//!
//! ```rust
//! use accounts_auth::jwt::JwtKeys;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     id: i32,
//!     exp: i64,
//! }
//!
//! let keys = JwtKeys::new(b"MySuperSecret");
//! let claims = UserClaims { id: 7, exp: 4118335200 };
//!
//! let token = keys.encode(&claims).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//!
//! let decoded: UserClaims = keys.decode(&token).unwrap();
//! assert_eq!(claims, decoded);
//! ```

use std::fmt;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    /// Creates a key pair from the raw secret.
    ///
    /// Expiration is checked without leeway: a token is rejected as soon as
    /// the current time passes its `exp` claim.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.algorithms = vec![ALGORITHM];

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs `body` into a compact token.
    ///
    /// `body` must carry an `exp` claim or [`JwtKeys::decode`] will reject it.
    pub fn encode<T>(&self, body: &T) -> Result<String>
    where
        T: Serialize,
    {
        Ok(encode(&Header::new(ALGORITHM), body, &self.encoding)?)
    }

    /// Verifies the signature and expiry of `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSignature`] if the token was signed with another secret
    /// - [`Error::TokenExpired`] if `exp` is in the past
    /// - [`Error::InvalidToken`] for anything structurally wrong
    pub fn decode<T>(&self, token: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        decode::<T>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("algorithm", &ALGORITHM)
            .field("secret", &"REDACTED")
            .finish()
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> Error {
    match err.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        ErrorKind::InvalidSignature => Error::InvalidSignature,
        _ => Error::InvalidToken,
    }
}
