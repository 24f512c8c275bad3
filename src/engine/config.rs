use crate::engine::ImportError;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Tunables for the chunked import.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ImportConfig {
    /// Maximum deals per chunk, and therefore per duplicate lookup.
    pub chunk_size: usize,
    /// Number of chunks processed in parallel.
    pub pool_size: usize
}

impl ImportConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if self.chunk_size == 0 {
            return Err(ImportError::InvalidConfig("chunk size must be at least 1".to_string()));
        }

        if self.pool_size == 0 {
            return Err(ImportError::InvalidConfig("pool size must be at least 1".to_string()));
        }

        if u32::try_from(self.pool_size).is_err() {
            return Err(ImportError::InvalidConfig(format!("pool size [{}] is too large", self.pool_size)));
        }

        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            pool_size: DEFAULT_POOL_SIZE
        }
    }
}
