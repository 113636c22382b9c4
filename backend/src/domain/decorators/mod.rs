//! Cross-cutting layers around [`HandlingService`](super::HandlingService).
//!
//! Every decorator holds exactly one inner service, implements the full
//! operation set by doing its concern, delegating and returning the inner
//! result untouched. Decorators never validate, rewrite arguments, or
//! reclassify errors, so they compose in any order:
//!
//! ```
//! use std::sync::Arc;
//!
//! use rembook::domain::decorators::{InstrumentingService, LoggingService, TracingService};
//! use rembook::domain::ports::NoOpServiceMetrics;
//! use rembook::domain::{CoreHandlingService, HandlingService};
//! use rembook::outbound::memory::InMemoryEntityStore;
//!
//! let core = CoreHandlingService::new(Arc::new(InMemoryEntityStore::new()));
//! let service: Arc<dyn HandlingService> = Arc::new(TracingService::new(
//!     InstrumentingService::new(Arc::new(NoOpServiceMetrics), LoggingService::new(core)),
//! ));
//! # let _ = service;
//! ```

mod instrumenting;
mod logging;
mod tracing_spans;

#[cfg(test)]
pub(crate) mod test_support;

pub use instrumenting::InstrumentingService;
pub use logging::LoggingService;
pub use tracing_spans::TracingService;
