//! # Ironlog DB
//!
//! Connection pool and embedded migrations.
//!
//! The pool is created once at startup and handed to `AppState`; it is the
//! only resource shared between requests.
//!
//! ```ignore
//! let pool = ironlog_db::init_db_pool().await?;
//! ironlog_db::run_migrations(&pool).await?;
//! ```

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Migrations under the workspace `migrations/` directory, compiled in.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, sqlx::Error> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            url,
            max_connections,
        })
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// Connects using the environment configuration.
pub async fn init_db_pool() -> Result<PgPool, sqlx::Error> {
    connect(&DatabaseConfig::from_env()?).await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Round-trips a trivial query; used by the health check.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrator_contains_schema() {
        assert!(MIGRATOR.iter().count() >= 1);
    }
}
