use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::Deal;
use crate::storage::{Storage, StorageError};

/// Attempts to store a single deal.
///
/// Any storage failure, including a panic inside the storage implementation, comes back
/// as an `Err` so the caller can count it and move on to the next deal.
pub fn persist<S: Storage>(storage: &S, deal: &Deal) -> Result<(), StorageError> {
    match catch_unwind(AssertUnwindSafe(|| storage.save(deal))) {
        Ok(result) => result,
        Err(payload) => Err(StorageError::Internal(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "storage panicked".to_string()
    }
}
