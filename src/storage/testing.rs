use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::Deal;
use crate::storage::{DealStorage, Storage, StorageError};
use crate::types::DealId;

/// How a `RecordingStorage` should misbehave for a given deal id.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Fault {
    Error,
    Panic
}

/// Storage double that wraps a real `DealStorage`, counts calls and injects faults.
pub struct RecordingStorage {
    inner: DealStorage,
    lookups: AtomicUsize,
    lookup_sizes: Mutex<Vec<usize>>,
    saves: Mutex<Vec<DealId>>,
    reported_existing: HashSet<DealId>,
    save_faults: Vec<(DealId, Fault)>,
    failing_lookup_id: Option<DealId>
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self {
            inner: DealStorage::new(),
            lookups: AtomicUsize::new(0),
            lookup_sizes: Mutex::new(Vec::new()),
            saves: Mutex::new(Vec::new()),
            reported_existing: HashSet::new(),
            save_faults: Vec::new(),
            failing_lookup_id: None
        }
    }

    /// Reports `deal_id` as already stored without it being in the inner store.
    pub fn with_existing(mut self, deal_id: &str) -> Self {
        self.reported_existing.insert(deal_id.to_string());
        self
    }

    pub fn with_save_fault(mut self, deal_id: &str, fault: Fault) -> Self {
        self.save_faults.push((deal_id.to_string(), fault));
        self
    }

    /// Fails any lookup whose candidate ids include `deal_id`.
    pub fn with_failing_lookup(mut self, deal_id: &str) -> Self {
        self.failing_lookup_id = Some(deal_id.to_string());
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn lookup_sizes(&self) -> Vec<usize> {
        let mut sizes = self.lookup_sizes.lock().map(|sizes| sizes.clone()).unwrap_or_default();
        sizes.sort_unstable();
        sizes
    }

    pub fn saved_attempts(&self) -> Vec<DealId> {
        let mut attempts = self.saves.lock().map(|saves| saves.clone()).unwrap_or_default();
        attempts.sort();
        attempts
    }

    pub fn stored_count(&self) -> usize {
        self.inner.len()
    }

    pub fn is_stored(&self, deal_id: &str) -> bool {
        self.inner.find_existing(&[deal_id]).map(|existing| !existing.is_empty()).unwrap_or(false)
    }
}

impl Storage for RecordingStorage {
    fn find_existing(&self, deal_ids: &[&str]) -> Result<HashSet<DealId>, StorageError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut sizes) = self.lookup_sizes.lock() {
            sizes.push(deal_ids.len());
        }

        if let Some(failing) = &self.failing_lookup_id {
            if deal_ids.contains(&failing.as_str()) {
                return Err(StorageError::Unavailable("simulated connection loss".to_string()));
            }
        }

        let mut existing = self.inner.find_existing(deal_ids)?;
        existing.extend(deal_ids.iter()
            .filter(|deal_id| self.reported_existing.contains(**deal_id))
            .map(|deal_id| deal_id.to_string()));

        Ok(existing)
    }

    fn save(&self, deal: &Deal) -> Result<(), StorageError> {
        if let Ok(mut saves) = self.saves.lock() {
            saves.push(deal.deal_id.clone());
        }

        match self.save_faults.iter().find(|(deal_id, _)| *deal_id == deal.deal_id) {
            Some((_, Fault::Error)) => Err(StorageError::Unavailable("simulated DB error".to_string())),
            Some((_, Fault::Panic)) => panic!("simulated storage panic for [{}]", deal.deal_id),
            None => self.inner.save(deal)
        }
    }
}
