//! Embedded PostgreSQL helpers for the Diesel store suites.
//!
//! Each suite boots a [`TestCluster`] with data directories under the target
//! directory, then provisions a uniquely named database migrated with the
//! crate's embedded migrations. Set `SKIP_TEST_CLUSTER=1` to skip suites where
//! PostgreSQL cannot be started.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl, sql_query};
use pg_embedded_setup_unpriv::TestCluster;
use rembook::outbound::persistence::run_pending_migrations;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

fn pg_embed_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let target = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"));
    let base = target
        .join("pg-embed")
        .join(format!("rembook-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient(err: &str) -> bool {
    let err = err.to_lowercase();
    ["connection reset", "connection refused", "timed out", "timeout", "dns error"]
        .iter()
        .any(|pattern| err.contains(pattern))
}

/// Start an embedded cluster, retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let _env = if std::env::var_os("PG_RUNTIME_DIR").is_none()
        || std::env::var_os("PG_DATA_DIR").is_none()
    {
        let (runtime_dir, data_dir) = pg_embed_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient(&last_error) {
                    break;
                }
                std::thread::sleep(Duration::from_millis(RETRY_DELAY_MS * (1 << attempt)));
            }
        }
    }
    Err(last_error)
}

/// Create a fresh database on `cluster`, apply migrations and return its URL.
pub fn provision_database(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("rembook_{}", Uuid::new_v4().simple());
    let admin_url = cluster.connection().database_url("postgres").to_string();
    let mut admin = PgConnection::establish(&admin_url).map_err(|err| err.to_string())?;
    sql_query(format!(r#"CREATE DATABASE "{name}""#))
        .execute(&mut admin)
        .map_err(|err| err.to_string())?;

    let url = cluster.connection().database_url(&name).to_string();
    run_pending_migrations(&url).map_err(|err| err.to_string())?;
    Ok(url)
}

/// Skip when `SKIP_TEST_CLUSTER` is truthy, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
