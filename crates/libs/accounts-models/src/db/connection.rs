//! Database connection management and migrations.

use diesel::PgConnection;
use diesel::r2d2::ConnectionManager;
use diesel::r2d2::Pool;
use diesel_migrations::embed_migrations;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use tracing::info;

use super::config::DbConfig;
use crate::prelude::*;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Database connection pool wrapper.
#[derive(Debug, Clone)]
pub struct DbConnection {
    /// PostgreSQL connection pool.
    pub pool: Pool<ConnectionManager<PgConnection>>,
}

impl DbConnection {
    /// Create a new database connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use accounts_models::db::{connection::DbConnection, config::DbConfig};
    ///
    /// let config = DbConfig::from_env().unwrap();
    /// let db = DbConnection::new(&config).unwrap();
    /// ```
    pub fn new(config: &DbConfig) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
        let pool = Pool::builder().build(manager)?;
        Ok(Self { pool })
    }

    /// Run pending migrations and return the connection.
    pub fn setup(self) -> Result<Self> {
        info!("Running Database Migrations");
        let mut conn = self.pool.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| Error::Migration(err.to_string()))?
            .len();
        info!("Applied {applied} migration(s)");
        Ok(self)
    }

    /// Runs `f` with a pooled connection on the blocking thread pool.
    pub(crate) async fn interact<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = &mut pool.get()?;
            f(conn)
        })
        .await?
    }
}
