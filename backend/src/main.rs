//! Handling service entry point.

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::fmt;

use rembook::server::{ServerSettings, create_server, log_filter};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(log_filter())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("load settings: {err}")))?;

    let result = create_server(settings).await?.await;
    info!(terminated = ?result, "server stopped");
    result
}
