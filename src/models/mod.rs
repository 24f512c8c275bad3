mod deal;
mod errors;
mod import_result;

pub use deal::Deal;
pub use import_result::{ImportOutcome, ImportResult, ImportTally};
