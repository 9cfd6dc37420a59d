//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by the selection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested rank does not address any element of the collection.
    #[error("rank {rank} is out of bounds for a collection of length {len}")]
    RankOutOfBounds { rank: usize, len: usize },
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;
