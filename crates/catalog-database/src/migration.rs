//! Database migration runner.

use sqlx::SqlitePool;
use tracing::info;

use catalog_core::error::{AppError, ErrorKind};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Run all pending database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!(
        migrations = MIGRATOR.migrations.len(),
        "Database migrations completed successfully"
    );
    Ok(())
}
