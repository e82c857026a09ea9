use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::Pool;

pub type PoolError = deadpool::managed::PoolError<diesel_async::pooled_connection::PoolError>;

pub type DbPool = Pool<AsyncPgConnection>;

/// Connections kept open to the job board database when DATABASE_POOL_SIZE is unset.
pub const DEFAULT_POOL_SIZE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionPoolError {
    #[error("Invalid job board pool configuration: {0}")]
    Config(#[from] deadpool::managed::BuildError),
    #[error("Job board database is unreachable: {0}")]
    Unreachable(#[from] PoolError),
    #[error("DATABASE_POOL_SIZE must be a positive integer, got {0:?}")]
    PoolSize(String),
}

/// Reads a pool size setting. Missing or blank means [`DEFAULT_POOL_SIZE`].
pub fn parse_pool_size(raw: Option<&str>) -> Result<usize, ConnectionPoolError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(DEFAULT_POOL_SIZE),
        Some(value) => match value.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ConnectionPoolError::PoolSize(value.to_string())),
        },
    }
}

/// Builds the pool without connecting.
pub fn build_pool(database_url: &str, max_size: usize) -> Result<DbPool, ConnectionPoolError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Ok(Pool::builder(manager).max_size(max_size).build()?)
}

/// Builds the pool and checks out one connection so an unreachable database fails at startup.
pub async fn establish_connection_pool(database_url: &str, max_size: usize) -> Result<DbPool, ConnectionPoolError> {
    let pool = build_pool(database_url, max_size)?;
    drop(pool.get().await?);
    tracing::debug!(max_size, "Job board database pool ready");
    Ok(pool)
}
