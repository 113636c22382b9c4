//! Outbound adapters implementing the domain ports.
//!
//! - **memory**: process-local `EntityStore` for development and tests
//! - **persistence**: PostgreSQL `EntityStore` using Diesel
//! - **metrics**: Prometheus `ServiceMetrics` exporter
//!
//! Adapters only translate between domain types and infrastructure
//! representations; they hold no business rules.

pub mod memory;
pub mod metrics;
pub mod persistence;
