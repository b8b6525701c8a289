//! Handle to the external store.
//!
//! The [`Store`] owns the database driver. The driver is built on first use,
//! exactly once: concurrent first callers wait for the same initialization.
//! If the initialization fails the error is returned to the waiting callers
//! and the next call tries again.
//!
//! Drivers are blocking. Each call runs on the blocking thread pool and is
//! bounded by the configured timeout. A call that does not finish in time is
//! reported as [`Error::Timeout`]. No lock is held while the store works.
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use evidence_tracker_configuration::Database as DatabaseConfig;
use evidence_tracker_primitives::DatabaseDriver;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::databases::{self, Database};
use super::error::Error;

pub struct Store {
    driver: DatabaseDriver,
    path: String,
    timeout: Duration,
    database: OnceCell<Arc<dyn Database>>,
}

impl Store {
    /// A store that connects on first use.
    #[must_use]
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            driver: config.driver,
            path: config.path.clone(),
            timeout: config.timeout(),
            database: OnceCell::new(),
        }
    }

    /// A store over an already built driver.
    #[must_use]
    pub fn with_database(database: Arc<dyn Database>, timeout: Duration) -> Self {
        Self {
            driver: DatabaseDriver::Sqlite3,
            path: String::new(),
            timeout,
            database: OnceCell::new_with(Some(database)),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs one operation against the store.
    ///
    /// # Errors
    ///
    /// Will return `Error::Upstream` if the store cannot be initialized or the
    /// operation fails, and `Error::Timeout` if the operation does not finish
    /// within the configured timeout.
    pub async fn call<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&dyn Database) -> Result<T, databases::error::Error> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database().await?;

        let result = self
            .bounded(tokio::task::spawn_blocking(move || operation(database.as_ref())))
            .await?;

        Ok(result?)
    }

    async fn database(&self) -> Result<Arc<dyn Database>, Error> {
        let database = self
            .database
            .get_or_try_init(|| async {
                let driver = self.driver;
                let path = self.path.clone();

                debug!(%driver, "initializing store");

                let database = self
                    .bounded(tokio::task::spawn_blocking(move || databases::driver::build(&driver, &path)))
                    .await??;

                info!(%driver, "store ready");

                Ok::<Arc<dyn Database>, Error>(Arc::from(database))
            })
            .await?;

        Ok(database.clone())
    }

    async fn bounded<T>(&self, task: tokio::task::JoinHandle<T>) -> Result<T, Error> {
        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(join_error)) => Err(Error::upstream(join_error)),
            Err(_elapsed) => Err(Error::Timeout {
                timeout: self.timeout,
                location: Location::caller(),
            }),
        }
    }
}
