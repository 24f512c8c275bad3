mod chunk;
mod chunk_worker;
mod duplicate_filter;
mod persister;

pub use chunk::{Chunk, ChunkSplitter};
pub use chunk_worker::ChunkWorker;
