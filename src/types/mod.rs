mod currency;
mod errors;

pub use currency::CurrencyCode;

pub type DealId = String;
