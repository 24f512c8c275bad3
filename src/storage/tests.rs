use super::{DealStorage, Storage, StorageError};
use crate::models::Deal;
use crate::types::CurrencyCode;
use anyhow::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

fn create_deal(deal_id: &str) -> Result<Deal> {
    Ok(Deal::new(
        deal_id,
        CurrencyCode::from_str("EUR")?,
        CurrencyCode::from_str("MAD")?,
        NaiveDateTime::from_str("2026-02-26T10:16:00")?,
        Decimal::from_str("2000.00")?
    ))
}

#[test]
fn test_storage_basic_find_and_save_operations() -> Result<()> {
    let storage = DealStorage::new();

    assert!(storage.find_existing(&["ID-1"])?.is_empty());

    storage.save(&create_deal("ID-1")?)?;

    let existing = storage.find_existing(&["ID-1", "ID-2"])?;

    assert_eq!(existing.len(), 1);
    assert!(existing.contains("ID-1"));

    Ok(())
}

#[test]
fn test_storage_rejects_second_save_of_same_id() -> Result<()> {
    let storage = DealStorage::new();
    storage.save(&create_deal("IT-001")?)?;

    let result = storage.save(&create_deal("IT-001")?);

    assert!(matches!(result, Err(StorageError::DuplicateKey { ref deal_id }) if deal_id == "IT-001"));
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[test]
fn test_storage_counts_all_deals() -> Result<()> {
    let storage = DealStorage::new();
    storage.save(&create_deal("ID-1")?)?;
    storage.save(&create_deal("ID-2")?)?;
    storage.save(&create_deal("ID-3")?)?;

    assert_eq!(storage.len(), 3);
    assert_eq!(storage.find_existing(&["ID-1", "ID-2", "ID-3", "ID-4"])?.len(), 3);

    Ok(())
}

#[test]
fn test_storage_allows_exactly_one_winner_under_concurrent_saves() -> Result<()> {
    let storage = Arc::new(DealStorage::new());
    let deal = create_deal("RACE-1")?;

    let handles: Vec<_> = (0..16).map(|_| {
        let storage = storage.clone();
        let deal = deal.clone();
        thread::spawn(move || storage.save(&deal).is_ok())
    }).collect();

    let winners = handles.into_iter()
        .filter_map(|handle| handle.join().ok())
        .filter(|saved| *saved)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(storage.len(), 1);

    Ok(())
}
