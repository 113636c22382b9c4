//! Prometheus implementations of the domain metrics ports.

mod prometheus_service_metrics;

pub use prometheus_service_metrics::PrometheusServiceMetrics;
