mod config;
mod errors;
mod import_coordinator;
mod worker_pool;

pub use config::{ImportConfig, DEFAULT_CHUNK_SIZE, DEFAULT_POOL_SIZE};
pub use errors::ImportError;
pub use import_coordinator::ImportCoordinator;
pub use worker_pool::WorkerPool;
