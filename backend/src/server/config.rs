//! Server settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: defaults, configuration file,
//! `REMBOOK_*` environment variables, command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Process configuration for the handling server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REMBOOK")]
pub struct ServerSettings {
    /// HTTP listen address, `host:port`.
    pub http_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Listen address, falling back to `0.0.0.0:8080`.
    pub fn http_addr(&self) -> &str {
        self.http_addr.as_deref().unwrap_or(DEFAULT_HTTP_ADDR)
    }

    /// Configured database URL, if any. Blank values count as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Pool size; 10 unless configured.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }
}
