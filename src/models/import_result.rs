use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts produced by a single chunk worker.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ImportOutcome {
    pub successful: usize,
    pub failed_or_skipped: usize
}

impl ImportOutcome {
    /// Outcome for a chunk whose records could not be processed at all.
    pub fn all_failed(records: usize) -> Self {
        Self {
            successful: 0,
            failed_or_skipped: records
        }
    }
}

/// Aggregate returned once per batch.
///
/// `total_received == successful_imports + failed_or_skipped` holds for every
/// value produced by the import coordinator.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub total_received: usize,
    pub successful_imports: usize,
    pub failed_or_skipped: usize
}

impl ImportResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Thread-safe accumulator that chunk outcomes are merged into as they complete.
#[derive(Debug, Default)]
pub struct ImportTally {
    successful: AtomicUsize,
    failed_or_skipped: AtomicUsize
}

impl ImportTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: ImportOutcome) {
        self.successful.fetch_add(outcome.successful, Ordering::Relaxed);
        self.failed_or_skipped.fetch_add(outcome.failed_or_skipped, Ordering::Relaxed);
    }

    pub fn finish(&self, total_received: usize) -> ImportResult {
        ImportResult {
            total_received,
            successful_imports: self.successful.load(Ordering::Relaxed),
            failed_or_skipped: self.failed_or_skipped.load(Ordering::Relaxed)
        }
    }
}
