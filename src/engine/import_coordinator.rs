use std::num::NonZeroUsize;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info};

use crate::engine::{ImportConfig, ImportError, WorkerPool};
use crate::models::{Deal, ImportOutcome, ImportResult, ImportTally};
use crate::pipeline::{ChunkSplitter, ChunkWorker};
use crate::storage::Storage;

/// Imports a batch of deals by fanning its chunks out over a shared worker pool.
pub struct ImportCoordinator<S: Storage> {
    storage: Arc<S>,
    pool: Arc<WorkerPool>,
    splitter: ChunkSplitter
}

impl<S: Storage> ImportCoordinator<S> {
    /// Creates a coordinator that writes to `storage` using the shared `pool`.
    pub fn new(storage: Arc<S>, pool: Arc<WorkerPool>, config: &ImportConfig) -> Result<Self, ImportError> {
        config.validate()?;

        let chunk_size = NonZeroUsize::new(config.chunk_size)
            .ok_or_else(|| ImportError::InvalidConfig("chunk size must be at least 1".to_string()))?;

        Ok(Self {
            storage,
            pool,
            splitter: ChunkSplitter::new(chunk_size)
        })
    }

    /// Imports every deal of the batch and returns the aggregate counts.
    ///
    /// Returns once every chunk has finished. Duplicates, failed saves and failed chunks are
    /// all folded into `failed_or_skipped`, so the returned totals always add up.
    ///
    /// # Errors
    /// Returns `ImportError::PoolClosed` if the worker pool was shut down before the call.
    pub async fn import(&self, deals: Vec<Deal>) -> Result<ImportResult, ImportError> {
        let total_received = deals.len();

        if deals.is_empty() {
            return Ok(ImportResult::empty());
        }

        if self.pool.is_closed() {
            return Err(ImportError::PoolClosed);
        }

        let tally = Arc::new(ImportTally::new());
        let chunks = self.splitter.split(deals.into());

        let dispatched = chunks.into_iter().map(|chunk| {
            let worker = ChunkWorker::new(self.storage.clone());
            let tally = tally.clone();
            let index = chunk.index();
            let size = chunk.len();

            let completion = self.pool.submit(move || tally.record(worker.process(&chunk)));

            async move { (index, size, completion.await) }
        });

        for (index, size, result) in join_all(dispatched).await {
            if let Err(error) = result {
                error!("Chunk [{index}] did not complete, counting its [{size}] deals as failed | {error}");
                tally.record(ImportOutcome::all_failed(size));
            }
        }

        let result = tally.finish(total_received);

        info!(
            "Finished processing all [{}] deals: [{}] imported, [{}] failed or skipped",
            result.total_received, result.successful_imports, result.failed_or_skipped
        );

        Ok(result)
    }
}
