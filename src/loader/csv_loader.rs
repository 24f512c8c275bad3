use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tokio::task::spawn_blocking;
use tracing::{debug, error};

use crate::loader::LoadError;
use crate::models::Deal;

/// Reads a CSV batch of deals and applies the field constraints to every row.
pub struct DealLoader;

impl DealLoader {
    /// Loads the deal batch at `path` on the blocking pool.
    ///
    /// # Errors
    /// Returns `LoadError::Validation` listing every bad row if any row is invalid;
    /// in that case no deal is returned at all.
    pub async fn load(path: impl AsRef<Path>) -> Result<Vec<Deal>, LoadError> {
        let path: PathBuf = path.as_ref().to_path_buf();

        spawn_blocking(move || {
            let file = File::open(&path).map_err(|error| {
                error!("Error opening CSV at path: {} | {error}", path.display());
                LoadError::Io(error)
            })?;

            Self::read(BufReader::new(file))
        }).await?
    }

    /// Parses and validates every row from `reader`.
    pub fn read<R: Read>(reader: R) -> Result<Vec<Deal>, LoadError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let mut deals = Vec::new();
        let mut violations = Vec::new();

        for (index, result) in reader.deserialize::<Deal>().enumerate() {
            let row = index + 1;

            match result {
                Ok(deal) => match deal.validate() {
                    Ok(()) => deals.push(deal),
                    Err(errors) => violations.extend(errors.into_iter().map(|error| format!("row {row}: {error}")))
                },
                Err(error) => match error.kind() {
                    csv::ErrorKind::Deserialize { err, .. } => violations.push(format!("row {row}: {}", describe(err))),
                    _ => return Err(LoadError::Csv(error))
                }
            }
        }

        if !violations.is_empty() {
            return Err(LoadError::Validation { violations });
        }

        debug!("Loaded [{}] deals", deals.len());

        Ok(deals)
    }
}

fn describe(error: &csv::DeserializeError) -> String {
    match error.field() {
        Some(field) => format!("field {} is invalid: {}", field + 1, error.kind()),
        None => error.kind().to_string()
    }
}
