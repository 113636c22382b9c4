//! Domain port surface for per-operation request metrics.
//!
//! The instrumenting decorator reports through this port so the exporter
//! (Prometheus in production) stays an outbound adapter.

use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording service metrics.
    pub enum ServiceMetricsError {
        /// Metric exporter rejected the write.
        Export => "service metrics exporter failed",
    }
}

/// Metrics recording port for service operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceMetrics: Send + Sync {
    /// Count one call of `method` and observe how long it took.
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    /// use rembook::domain::ports::{NoOpServiceMetrics, ServiceMetrics};
    ///
    /// # async fn demo() {
    /// let metrics = NoOpServiceMetrics;
    /// let result = metrics
    ///     .record_request("add_book", Duration::from_millis(3))
    ///     .await;
    /// assert!(result.is_ok());
    /// # }
    /// ```
    async fn record_request(
        &self,
        method: &str,
        latency: Duration,
    ) -> Result<(), ServiceMetricsError>;
}

/// No-op implementation used when metrics are disabled or in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpServiceMetrics;

#[async_trait]
impl ServiceMetrics for NoOpServiceMetrics {
    async fn record_request(
        &self,
        _method: &str,
        _latency: Duration,
    ) -> Result<(), ServiceMetricsError> {
        Ok(())
    }
}
