//! User persistence for the accounts service.
//!
//! Provides the Diesel user model, the [`UserRepository`](repository::UserRepository)
//! port the web layer talks to, and a PostgreSQL-backed implementation of it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use accounts_models::{
//!     db::{config::DbConfig, connection::DbConnection},
//!     repository::UserRepository,
//! };
//!
//! # async fn example() -> accounts_models::prelude::Result<()> {
//! let config = DbConfig::from_env()?;
//! let db = DbConnection::new(&config)?.setup()?;
//!
//! let users = db.find_many().await?;
//! println!("Found {} users", users.len());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod prelude;
pub mod repository;
mod schema;
pub mod user;
