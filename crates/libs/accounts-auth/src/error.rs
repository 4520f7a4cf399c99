#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error("Token Missing")]
    TokenMissing,
    #[error("Malformed Authorization Header")]
    MalformedHeader,
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Invalid Token Signature")]
    InvalidSignature,
    #[error("Token Expired")]
    TokenExpired,
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
    #[error("Invalid password hash parameters {0}")]
    HashParams(argon2::Error),
    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}
