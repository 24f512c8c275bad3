use crate::models::Deal;
use crate::types::DealId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealError {
    #[error("Deal unique id is required")]
    BlankId,
    #[error("Deal amount must be positive for deal [{deal_id}], got [{amount}]")]
    NonPositiveAmount {
        deal_id: DealId,
        amount: Decimal
    }
}

impl DealError {
    pub fn non_positive_amount(deal: &Deal) -> Self {
        Self::NonPositiveAmount {
            deal_id: deal.deal_id.clone(),
            amount: deal.amount
        }
    }
}
