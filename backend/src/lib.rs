//! rembook handling service: books and chapters over HTTP/JSON.
//!
//! Layout follows ports and adapters:
//! - [`domain`]: entities, the `HandlingService` contract, the core service
//!   and its logging, metrics and tracing decorators.
//! - [`inbound`]: actix-web handlers.
//! - [`outbound`]: in-memory and PostgreSQL entity stores, Prometheus metrics.
//! - [`middleware`]: access control and request tracing.
//! - [`server`]: settings, composition and startup.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
