//! Embedded schema migrations applied at startup.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::EntityStoreError;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every pending migration to `database_url`.
///
/// Uses a synchronous connection; call it from `spawn_blocking` inside an
/// async runtime.
///
/// # Errors
///
/// `Connection` when the database is unreachable, `Query` when a migration
/// fails.
pub fn run_pending_migrations(database_url: &str) -> Result<(), EntityStoreError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| EntityStoreError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| EntityStoreError::query(format!("migration: {err}")))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
