use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import configuration is invalid: {0}")]
    InvalidConfig(String),
    #[error("Worker pool has been shut down")]
    PoolClosed,
    #[error("Worker task did not complete: {0}")]
    WorkerFailed(#[from] JoinError)
}
