mod csv_loader;
mod errors;

pub use csv_loader::DealLoader;
pub use errors::LoadError;
