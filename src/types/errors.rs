use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("Currency error: code is required")]
    Missing,
    #[error("Currency error: ISO code must be 3 characters, got [{0}]")]
    InvalidLength(String),
    #[error("Currency error: ISO code must be alphabetic, got [{0}]")]
    InvalidCharacter(String)
}
