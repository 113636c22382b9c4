//! Prometheus adapter for per-operation service metrics.
//!
//! # Metric Specification
//!
//! - `api_handling_service_request_count` (counter, label `method`): calls
//!   received, successful or not.
//! - `api_handling_service_request_latency_seconds` (histogram, label
//!   `method`): time spent in the wrapped service.

use std::time::Duration;

use async_trait::async_trait;
use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};

use crate::domain::ports::{ServiceMetrics, ServiceMetricsError};

const NAMESPACE: &str = "api";
const SUBSYSTEM: &str = "handling_service";

/// Prometheus-backed [`ServiceMetrics`] recorder.
#[derive(Clone)]
pub struct PrometheusServiceMetrics {
    request_count: CounterVec,
    request_latency: HistogramVec,
}

impl PrometheusServiceMetrics {
    /// Create both metrics and register them with `registry`.
    ///
    /// # Errors
    ///
    /// Fails when a metric with the same name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let request_count = CounterVec::new(
            Opts::new("request_count", "Number of requests received.")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
            &["method"],
        )?;
        let request_latency = HistogramVec::new(
            HistogramOpts::new(
                "request_latency_seconds",
                "Total duration of requests in seconds.",
            )
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
            &["method"],
        )?;
        registry.register(Box::new(request_count.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;
        Ok(Self {
            request_count,
            request_latency,
        })
    }
}

#[async_trait]
impl ServiceMetrics for PrometheusServiceMetrics {
    async fn record_request(
        &self,
        method: &str,
        latency: Duration,
    ) -> Result<(), ServiceMetricsError> {
        self.request_count.with_label_values(&[method]).inc();
        self.request_latency
            .with_label_values(&[method])
            .observe(latency.as_secs_f64());
        Ok(())
    }
}
