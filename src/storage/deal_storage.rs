use crate::models::Deal;
use crate::storage::{Storage, StorageError};
use crate::types::DealId;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory deal store keyed by the deal's unique identifier.
pub struct DealStorage {
    deals: Arc<DashMap<DealId, Deal>>
}

impl DealStorage {
    pub fn new() -> Self {
        Self {
            deals: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }
}

impl Default for DealStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for DealStorage {
    fn find_existing(&self, deal_ids: &[&str]) -> Result<HashSet<DealId>, StorageError> {
        Ok(deal_ids.iter()
            .filter(|deal_id| self.deals.contains_key(**deal_id))
            .map(|deal_id| deal_id.to_string())
            .collect())
    }

    fn save(&self, deal: &Deal) -> Result<(), StorageError> {
        //NOTE: The entry lock makes check-and-insert atomic, two workers racing on one id cannot both win
        match self.deals.entry(deal.deal_id.clone()) {
            Entry::Occupied(_) => Err(StorageError::duplicate_key(deal)),
            Entry::Vacant(entry) => {
                entry.insert(deal.clone());
                Ok(())
            }
        }
    }
}
