//! PostgreSQL persistence for books and chapters.
//!
//! Built on Diesel with `diesel-async` and a `bb8` pool. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module; only the store, the pool and the migration entry point are public.
//!
//! ```ignore
//! use rembook::outbound::persistence::{DbPool, DieselEntityStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/rembook")).await?;
//! let store = DieselEntityStore::new(pool);
//! ```

mod diesel_entity_store;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_entity_store::DieselEntityStore;
pub use migrations::{MIGRATIONS, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
