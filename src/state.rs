use crate::config::AppConfig;
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        // Fail fast when the store is unreachable instead of on the first request.
        sqlx::query("SELECT 1")
            .execute(&db)
            .await
            .context("ping database")?;

        Ok(Self { db, config })
    }

    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// State backed by a pool that never connects until a query runs.
    /// Requests rejected before the store is touched work against it.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig::default());
        let db = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy(&config.database_url)
            .expect("lazy pool ok");
        Self { db, config }
    }
}
