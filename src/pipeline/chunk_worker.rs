use std::sync::Arc;

use tracing::{debug, error};

use crate::models::ImportOutcome;
use crate::pipeline::duplicate_filter::filter_duplicates;
use crate::pipeline::persister::persist;
use crate::pipeline::Chunk;
use crate::storage::Storage;

/// Runs the filter-then-persist sequence for one chunk.
pub struct ChunkWorker<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> ChunkWorker<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Processes every deal of the chunk sequentially and returns the chunk-local counts.
    ///
    /// A failed lookup leaves nothing safe to persist, so the whole chunk counts as failed.
    pub fn process(&self, chunk: &Chunk) -> ImportOutcome {
        let filtered = match filter_duplicates(self.storage.as_ref(), chunk.deals()) {
            Ok(filtered) => filtered,
            Err(error) => {
                error!("Duplicate lookup failed for chunk [{}], skipping [{}] deals | {error}", chunk.index(), chunk.len());
                return ImportOutcome::all_failed(chunk.len());
            }
        };

        let mut outcome = ImportOutcome {
            successful: 0,
            failed_or_skipped: filtered.duplicates
        };

        for deal in filtered.fresh {
            match persist(self.storage.as_ref(), deal) {
                Ok(()) => outcome.successful += 1,
                Err(error) => {
                    error!("Failed to save deal: [{}] | {error}", deal.deal_id);
                    outcome.failed_or_skipped += 1;
                }
            }
        }

        debug!("Chunk [{}] finished: [{}] saved, [{}] failed or skipped", chunk.index(), outcome.successful, outcome.failed_or_skipped);

        outcome
    }
}
