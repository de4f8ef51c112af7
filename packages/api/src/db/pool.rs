//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::error::ApiError;
use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
/// Connection string and pool size come from [`Settings::database`].
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        let settings = Settings::new()?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.database.maxconnections)
            .connect(&settings.database.url)
            .await?;

        tracing::info!(
            max_connections = settings.database.maxconnections,
            "database pool ready"
        );
        Ok(pool)
    })
    .await
}
