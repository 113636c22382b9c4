//! Translation of pool and Diesel failures into `EntityStoreError`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EntityStoreError;

use super::pool::PoolError;

/// Pool failures are connection failures regardless of stage.
pub(crate) fn map_pool_error(error: PoolError) -> EntityStoreError {
    EntityStoreError::connection(error.into_message())
}

/// Map a Diesel error raised while working on `subject` (e.g. `"book b-1"`).
///
/// Missing rows become `NotFound` and relation violations become
/// `Constraint`; driver detail is logged at debug level only.
pub(crate) fn map_diesel_error(error: DieselError, subject: &str) -> EntityStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), subject, "diesel operation failed");
        }
        other => debug!(error = %other, subject, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => EntityStoreError::not_found(subject),
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            EntityStoreError::constraint(format!("{subject} violates a book reference"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EntityStoreError::constraint(format!("{subject} already exists"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EntityStoreError::connection("database connection closed")
        }
        DieselError::QueryBuilderError(_) => EntityStoreError::query("database query error"),
        _ => EntityStoreError::query("database error"),
    }
}
