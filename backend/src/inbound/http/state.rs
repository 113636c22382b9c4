//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the outermost
//! [`HandlingService`], so they stay testable with mocks and never learn
//! which decorators are composed behind it.

use std::sync::Arc;

use crate::domain::HandlingService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub service: Arc<dyn HandlingService>,
}

impl HttpState {
    /// Wrap the composed service.
    pub fn new(service: Arc<dyn HandlingService>) -> Self {
        Self { service }
    }
}
