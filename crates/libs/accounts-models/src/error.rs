//! Persistence error types.

/// Persistence operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    /// Failure while applying embedded migrations.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Blocking database task panicked or was cancelled.
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    /// Required environment variable is not set.
    #[error("Env Variable '{0}' missing")]
    EnvMissing(&'static str),

    /// No user with the given id.
    #[error("User {0} not found")]
    UserNotFound(i32),
}
