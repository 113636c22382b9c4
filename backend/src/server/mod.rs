//! Server construction: service composition, middleware wiring and startup.
//!
//! [`compose_service`] stacks the decorators over the core service,
//! [`build_app`] mounts the routes and middleware, and [`create_server`]
//! turns [`ServerSettings`] into a running listener.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::decorators::{InstrumentingService, LoggingService, TracingService};
use crate::domain::ports::{EntityStore, ServiceMetrics};
use crate::domain::{CoreHandlingService, HandlingService};
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::{AccessControl, Trace};
use crate::outbound::memory::InMemoryEntityStore;
use crate::outbound::metrics::PrometheusServiceMetrics;
use crate::outbound::persistence::{DbPool, DieselEntityStore, PoolConfig, run_pending_migrations};

/// Default directive when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`] so the
/// per-call "handled" events and operation spans are kept.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Path serving the Prometheus text exposition.
pub const METRICS_PATH: &str = "/metrics";

/// Wrap the core service in tracing, instrumenting and logging layers.
///
/// Outermost first: tracing opens the operation span, instrumenting times
/// the rest of the chain, logging records the core's outcome.
pub fn compose_service(
    store: Arc<dyn EntityStore>,
    metrics: Arc<dyn ServiceMetrics>,
) -> Arc<dyn HandlingService> {
    let core = CoreHandlingService::new(store);
    Arc::new(TracingService::new(InstrumentingService::new(
        metrics,
        LoggingService::new(core),
    )))
}

/// Prometheus middleware serving `/metrics` from `registry`.
///
/// # Errors
///
/// Returns an error when the HTTP metrics cannot be registered.
pub fn http_metrics(registry: &Registry) -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("api")
        .registry(registry.clone())
        .endpoint(METRICS_PATH)
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

/// Build the application: handling routes, `/metrics`, and (debug builds)
/// Swagger UI at `/docs`.
///
/// Middleware order, outermost first: trace span, access control, HTTP
/// metrics.
pub fn build_app(
    state: web::Data<HttpState>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().app_data(state).configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app.wrap(prometheus).wrap(AccessControl).wrap(Trace)
}

/// Select the entity store: PostgreSQL when a URL is configured (after
/// applying pending migrations), the in-memory store otherwise.
///
/// # Errors
///
/// Returns an error when migrations fail or the pool cannot be built.
pub async fn build_store(settings: &ServerSettings) -> std::io::Result<Arc<dyn EntityStore>> {
    let Some(url) = settings.database_url() else {
        warn!("no database configured; using the in-memory entity store");
        return Ok(Arc::new(InMemoryEntityStore::new()));
    };

    let migration_url = url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(Arc::new(DieselEntityStore::new(pool)))
}

/// Construct the HTTP server described by `settings`.
///
/// # Errors
///
/// Propagates store, metrics registration and socket binding failures.
pub async fn create_server(settings: ServerSettings) -> std::io::Result<Server> {
    let store = build_store(&settings).await?;

    let registry = Registry::new();
    let service_metrics = PrometheusServiceMetrics::new(&registry)
        .map_err(|err| std::io::Error::other(format!("service metrics registration failed: {err}")))?;
    let prometheus = http_metrics(&registry)?;

    let state = web::Data::new(HttpState::new(compose_service(
        store,
        Arc::new(service_metrics),
    )));

    let addr = settings.http_addr().to_owned();
    let server = HttpServer::new(move || build_app(state.clone(), prometheus.clone()))
        .bind(addr.as_str())?
        .run();
    info!(transport = "http", address = %addr, "listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use env_lock::lock_env;
    use rstest::rstest;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[rstest]
    #[case::unset(None, LevelFilter::INFO)]
    #[case::explicit(Some("debug"), LevelFilter::DEBUG)]
    fn log_filter_defaults_to_info(#[case] rust_log: Option<&str>, #[case] expected: LevelFilter) {
        let _guard = lock_env([("RUST_LOG", rust_log.map(str::to_owned))]);

        assert_eq!(log_filter().max_level_hint(), Some(expected));
    }
}
