mod engine;
mod loader;
mod models;
mod pipeline;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use csv::Writer;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{ImportConfig, ImportCoordinator, WorkerPool, DEFAULT_CHUNK_SIZE, DEFAULT_POOL_SIZE};
use crate::loader::{DealLoader, LoadError};
use crate::models::ImportResult;
use crate::storage::DealStorage;

/// Imports a CSV batch of FX deals, skipping deals whose id is already stored.
#[derive(Debug, Parser)]
#[command(name = "deal-importer", version)]
struct Cli {
    /// CSV file with header deal_unique_id,from_currency,to_currency,deal_timestamp,deal_amount
    input: PathBuf,
    /// One of error, warn, info, debug, trace
    #[arg(long, env = "DEAL_IMPORT_LOG_LEVEL", default_value = "error")]
    log_level: String,
    /// Deals per chunk, one duplicate lookup is issued per chunk
    #[arg(long, env = "DEAL_IMPORT_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    /// Chunks processed in parallel
    #[arg(long = "workers", env = "DEAL_IMPORT_WORKERS", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: usize
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let config = ImportConfig::default()
        .with_chunk_size(cli.chunk_size)
        .with_pool_size(cli.pool_size);

    let deals = match DealLoader::load(&cli.input).await {
        Ok(deals) => deals,
        Err(LoadError::Validation { violations }) => {
            eprintln!("Validation failed for one or more fields:");

            for violation in violations {
                eprintln!("  {violation}");
            }

            exit(1);
        }
        Err(error) => return Err(error.into())
    };

    info!("Received request to import [{}] deals", deals.len());

    let storage = Arc::new(DealStorage::new());
    let pool = Arc::new(WorkerPool::new(&config)?);
    let coordinator = ImportCoordinator::new(storage.clone(), pool.clone(), &config)?;

    let timer = Instant::now();
    let result = coordinator.import(deals).await;
    let duration = timer.elapsed();

    pool.shutdown().await;

    let result = result?;

    info!("Imported deals in: {duration:?}, store now holds [{}] deals", storage.len());

    write_result_to_stdout(&result)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The result goes to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_result_to_stdout(result: &ImportResult) -> Result<()> {
    let mut output = Writer::from_writer(BufWriter::new(stdout().lock()));

    output.serialize(result)?;
    output.flush()?;

    Ok(())
}
