//! Connection pool lifecycle
//!
//! A [`Database`] starts out uninitialized. `start` installs a PostgreSQL
//! pool, `stop` closes it and returns the value to its initial state so it
//! can be started again. Connections handed out by `acquire` go back to the
//! pool when dropped.

use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    ConnectOptions, Connection as _, Postgres,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::PoolConfig;
use crate::error::{DbError, Result};

/// A checked-out connection. Returned to the pool on drop.
pub type Connection = PoolConnection<Postgres>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub in_use: usize,
}

#[derive(Debug, Clone)]
struct Started {
    pool: PgPool,
    options: PgConnectOptions,
}

#[derive(Debug, Default)]
pub struct Database {
    state: Mutex<Option<Started>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the pool from `config`. No connection is opened until the
    /// first `acquire`.
    pub fn start(&self, config: &PoolConfig) -> Result<()> {
        let mut slot = self.slot();
        if slot.is_some() {
            return Err(DbError::AlreadyStarted);
        }

        let options = config.connect_options();
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy_with(options.clone());
        *slot = Some(Started { pool, options });

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_connections = config.max_connections,
            "Connection pool started"
        );

        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.slot().is_some()
    }

    /// Waits for a free connection. Transport errors are surfaced as
    /// [`DbError::Store`] with their original cause.
    pub async fn acquire(&self) -> Result<Connection> {
        // Clone out so the lock is not held across the await.
        let Started { pool, options } = self.slot().clone().ok_or(DbError::NotStarted)?;

        match pool.acquire().await {
            Ok(conn) => {
                tracing::debug!(idle = pool.num_idle(), size = pool.size(), "Connection acquired");
                Ok(conn)
            }
            // sqlx keeps retrying refused connects until the deadline and then
            // reports only the timeout. With no live connection in the pool the
            // server is unreachable, so one direct attempt recovers the cause.
            Err(sqlx::Error::PoolTimedOut) if pool.size() == 0 => {
                Err(DbError::Store(connect_error(&options).await))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Hands a connection back to the pool. Dropping it does the same.
    pub fn release(&self, conn: Connection) {
        drop(conn);
        tracing::debug!("Connection released");
    }

    pub fn stats(&self) -> Option<PoolStats> {
        self.slot().as_ref().map(|Started { pool, .. }| {
            let size = pool.size();
            let idle = pool.num_idle();
            PoolStats {
                size,
                idle,
                in_use: (size as usize).saturating_sub(idle),
            }
        })
    }

    /// Closes every connection and resets to the uninitialized state.
    /// A no-op when the pool was never started.
    pub async fn stop(&self) {
        let Some(Started { pool, .. }) = self.slot().take() else {
            return;
        };

        pool.close().await;
        tracing::info!("Connection pool stopped");
    }

    fn slot(&self) -> MutexGuard<'_, Option<Started>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn connect_error(options: &PgConnectOptions) -> sqlx::Error {
    match options.connect().await {
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable");
            e
        }
        // The server came back between the two attempts
        Ok(conn) => {
            let _ = conn.close().await;
            sqlx::Error::PoolTimedOut
        }
    }
}
