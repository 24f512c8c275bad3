use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::Arc;

use crate::models::Deal;

/// A contiguous window over a shared, read-only batch of deals.
#[derive(Debug, Clone)]
pub struct Chunk {
    index: usize,
    batch: Arc<[Deal]>,
    range: Range<usize>
}

impl Chunk {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn deals(&self) -> &[Deal] {
        &self.batch[self.range.clone()]
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }
}

/// Splits a batch into consecutive chunks of at most `chunk_size` deals.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSplitter {
    chunk_size: NonZeroUsize
}

impl ChunkSplitter {
    pub fn new(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }

    /// Produces `ceil(len / chunk_size)` chunks covering the batch exactly once, in order.
    pub fn split(&self, batch: Arc<[Deal]>) -> Vec<Chunk> {
        let size = self.chunk_size.get();
        let total = batch.len();

        (0..total).step_by(size)
            .enumerate()
            .map(|(index, start)| Chunk {
                index,
                batch: batch.clone(),
                range: start..total.min(start + size)
            })
            .collect()
    }
}
