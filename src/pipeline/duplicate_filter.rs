use tracing::warn;

use crate::models::Deal;
use crate::storage::{Storage, StorageError};

/// Deals of one chunk split by whether their id was already stored.
#[derive(Debug)]
pub struct FilteredChunk<'a> {
    pub fresh: Vec<&'a Deal>,
    pub duplicates: usize
}

/// Drops deals whose id already exists in storage, using one lookup for the whole chunk.
///
/// Only storage state is consulted. Two deals sharing an id inside the same chunk both
/// pass when the id is not stored yet; the storage uniqueness constraint settles them.
pub fn filter_duplicates<'a, S: Storage>(storage: &S, deals: &'a [Deal]) -> Result<FilteredChunk<'a>, StorageError> {
    let deal_ids: Vec<&str> = deals.iter().map(|deal| deal.deal_id.as_str()).collect();
    let existing = storage.find_existing(&deal_ids)?;

    let mut fresh = Vec::with_capacity(deals.len());
    let mut duplicates = 0;

    for deal in deals {
        if existing.contains(&deal.deal_id) {
            warn!("Duplicate deal ignored: [{}]", deal.deal_id);
            duplicates += 1;
        } else {
            fresh.push(deal);
        }
    }

    Ok(FilteredChunk { fresh, duplicates })
}
