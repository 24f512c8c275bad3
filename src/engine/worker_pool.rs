use std::future::Future;
use std::sync::Arc;

use tokio::spawn;
use tokio::sync::Semaphore;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::engine::{ImportConfig, ImportError};

/// Fixed-size pool that runs blocking jobs, at most `size` at a time.
///
/// Created once at startup and shared by every import. `shutdown` drains in-flight
/// jobs and then refuses new ones.
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: u32
}

impl WorkerPool {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        config.validate()?;

        let size = u32::try_from(config.pool_size)
            .map_err(|_| ImportError::InvalidConfig(format!("pool size [{}] is too large", config.pool_size)))?;

        Ok(Self {
            permits: Arc::new(Semaphore::new(config.pool_size)),
            size
        })
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    /// Queues `job` and returns a future resolving to its result once a worker has run it.
    ///
    /// The job is dispatched immediately; awaiting the returned future only collects it.
    pub fn submit<F, T>(&self, job: F) -> impl Future<Output = Result<T, ImportError>> + use<F, T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static
    {
        let permits = self.permits.clone();

        let handle = spawn(async move {
            let _permit = permits.acquire_owned().await.map_err(|_| ImportError::PoolClosed)?;
            Ok::<T, ImportError>(spawn_blocking(job).await?)
        });

        async move { Ok::<T, ImportError>(handle.await??) }
    }

    /// Waits for every running or queued job to finish, then closes the pool.
    pub async fn shutdown(&self) {
        //NOTE: The semaphore is fair, so this waits behind jobs that were queued before shutdown began
        match self.permits.acquire_many(self.size).await {
            Ok(_drained) => {
                self.permits.close();
                info!("Worker pool of [{}] drained and shut down", self.size);
            }
            Err(_) => debug!("Worker pool already shut down")
        }
    }
}
