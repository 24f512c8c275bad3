use crate::models::Deal;
use crate::types::DealId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Deal [{deal_id}] violates the unique id constraint")]
    DuplicateKey {
        deal_id: DealId
    },
    #[cfg(test)]
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Storage failed internally: {0}")]
    Internal(String)
}

impl StorageError {
    pub fn duplicate_key(deal: &Deal) -> Self {
        Self::DuplicateKey { deal_id: deal.deal_id.clone() }
    }
}
