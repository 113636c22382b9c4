//! Domain layer: entities, the handling service contract and its decorators.
//!
//! Purpose: keep business rules (argument validation, one store call per
//! operation) independent of transport and persistence. Inbound adapters call
//! [`HandlingService`]; outbound adapters implement [`ports`].
//!
//! Public surface:
//! - Book, Chapter, NewBook, NewChapter: entity values.
//! - ServiceError: the error returned by every operation.
//! - HandlingService, CoreHandlingService: contract and base implementation.
//! - decorators: logging, metrics and tracing layers.

pub mod book;
pub mod decorators;
pub mod error;
pub mod ports;
pub mod service;

pub use self::book::{Book, Chapter, NewBook, NewChapter};
pub use self::error::ServiceError;
#[cfg(test)]
pub use self::service::MockHandlingService;
pub use self::service::{CoreHandlingService, HandlingService};
