use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::models::errors::DealError;
use crate::types::{CurrencyCode, DealId};

/// A single FX deal as submitted for import.
///
/// Deals are read-only once loaded. Two deals are considered the same deal when
/// their unique identifiers match, regardless of the remaining fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    /// Caller supplied identifier, unique across the store.
    #[serde(rename = "deal_unique_id")]
    pub deal_id: DealId,
    /// Currency the deal is ordered from.
    pub from_currency: CurrencyCode,
    /// Currency the deal is ordered to.
    pub to_currency: CurrencyCode,
    #[serde(rename = "deal_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Amount in the ordering currency, strictly positive.
    #[serde(rename = "deal_amount", deserialize_with = "deserialize_amount")]
    pub amount: Decimal
}

impl Deal {
    #[cfg(test)]
    pub fn new(deal_id: impl Into<DealId>, from_currency: CurrencyCode, to_currency: CurrencyCode, timestamp: NaiveDateTime, amount: Decimal) -> Self {
        Self {
            deal_id: deal_id.into(),
            from_currency,
            to_currency,
            timestamp,
            amount
        }
    }

    /// Checks the field constraints that the type system does not already enforce.
    ///
    /// # Errors
    /// Returns every `DealError` found, so a caller can report all of them at once.
    pub fn validate(&self) -> Result<(), Vec<DealError>> {
        let mut errors = Vec::new();

        if self.deal_id.trim().is_empty() {
            errors.push(DealError::BlankId);
        }

        if self.amount <= Decimal::ZERO {
            errors.push(DealError::non_positive_amount(self));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl PartialEq for Deal {
    fn eq(&self, other: &Self) -> bool {
        self.deal_id == other.deal_id
    }
}

impl Eq for Deal {}

impl Hash for Deal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.deal_id.hash(state);
    }
}

//NOTE: csv hands numeric looking fields over as floats, parsing the raw text keeps the submitted digits and scale
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Decimal::from_str(value.trim()).map_err(de::Error::custom)
}
