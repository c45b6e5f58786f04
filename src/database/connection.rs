use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::config::RepositoryConfig;
use crate::error::Result;

/// Owns the PostgreSQL connection pool behind the deployment repository.
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connect using configuration read from the environment.
    pub async fn new() -> Result<Self> {
        Self::from_config(&RepositoryConfig::from_env()?).await
    }

    /// Connect with an explicit configuration.
    pub async fn from_config(config: &RepositoryConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the repository tables and indexes when missing. Idempotent,
    /// so safe to run at every startup.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(include_str!(
            "../../migrations/20240501000000_create_form_deployment_tables.sql"
        ))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<bool> {
        let row = sqlx::query("SELECT 1 as health").fetch_one(&self.pool).await?;

        let health: i32 = row.get("health");
        Ok(health == 1)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
