use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to read deal batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed deal batch: {0}")]
    Csv(#[from] csv::Error),
    #[error("Validation failed for one or more fields ({} violation(s))", .violations.len())]
    Validation {
        violations: Vec<String>
    },
    #[error("Deal loading did not complete: {0}")]
    Worker(#[from] JoinError)
}
