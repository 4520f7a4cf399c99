//! Error types for the accounts service binary.

/// Errors that can stop the accounts service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Model(#[from] accounts_models::error::Error),

    #[error(transparent)]
    Web(#[from] accounts_web::error::Error),

    #[error("Env Variable '{0}' has an invalid value")]
    EnvInvalid(&'static str),
}
