//! Service-level error taxonomy.
//!
//! These errors are transport agnostic. The HTTP adapter switches on the
//! variant to pick a status code and forwards the message verbatim.

use thiserror::Error;

use super::ports::EntityStoreError;

/// Failure returned by every [`HandlingService`](super::HandlingService)
/// operation.
///
/// # Examples
/// ```
/// use rembook::domain::ServiceError;
///
/// let err = ServiceError::InvalidArgument;
/// assert!(err.is_invalid_argument());
/// assert_eq!(err.to_string(), "invalid argument");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required argument was empty. Raised before any store call.
    #[error("invalid argument")]
    InvalidArgument,
    /// Any backend-originated failure; opaque to callers.
    #[error(transparent)]
    Store(#[from] EntityStoreError),
}

impl ServiceError {
    /// Whether the caller supplied an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument)
    }
}
