//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the entity store and the metrics exporter). Each trait exposes strongly
//! typed errors so adapters map their failures into predictable variants.

mod entity_store;
mod macros;
mod service_metrics;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use entity_store::MockEntityStore;
pub use entity_store::{EntityStore, EntityStoreError};
#[cfg(test)]
pub use service_metrics::MockServiceMetrics;
pub use service_metrics::{NoOpServiceMetrics, ServiceMetrics, ServiceMetricsError};
