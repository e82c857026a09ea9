use std::sync::Arc;

use anyhow::Context;
use data_model_jb::db::{establish_connection_pool, parse_pool_size};
use data_model_jb::store::{MemoryStore, PgStore, SharedStore};

/// Retrieves the value for the env var DATABASE_URL, treating an empty value as unset.
pub fn get_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty())
}

/// Picks the storage backend once at startup: PostgreSQL when DATABASE_URL is set,
/// otherwise a process-local in-memory store.
///
/// DATABASE_POOL_SIZE caps the number of open connections.
/// Fails if DATABASE_URL is set but the database cannot be reached.
pub async fn select_store() -> anyhow::Result<SharedStore> {
    match get_database_url() {
        Some(database_url) => {
            let pool_size = parse_pool_size(std::env::var("DATABASE_POOL_SIZE").ok().as_deref())?;
            let pool = establish_connection_pool(&database_url, pool_size)
                .await
                .context("Couldn't connect to the database named by DATABASE_URL")?;
            tracing::info!(pool_size, "Using PostgreSQL store");
            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set: using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
