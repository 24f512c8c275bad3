mod deal_storage;
mod errors;
#[cfg(test)]
pub mod testing;
#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::models::Deal;
use crate::types::DealId;

pub use deal_storage::DealStorage;
pub use errors::StorageError;

/// Storage operations the import pipeline depends on.
///
/// Both operations are synchronous and must be safe to call from many workers at once.
pub trait Storage: Send + Sync + 'static {
    /// Returns the subset of `deal_ids` already present in storage.
    fn find_existing(&self, deal_ids: &[&str]) -> Result<HashSet<DealId>, StorageError>;
    /// Inserts one deal, failing with `StorageError::DuplicateKey` if its id is taken.
    fn save(&self, deal: &Deal) -> Result<(), StorageError>;
}
