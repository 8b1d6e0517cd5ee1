//! Error types for fxbench
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FxBenchError
pub type Result<T> = std::result::Result<T, FxBenchError>;

/// Unified error type for fxbench operations
#[derive(Debug, Error)]
pub enum FxBenchError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Access Errors
    // -------------------------------------------------------------------------
    #[error("record index {index} out of range (file holds {record_count} records)")]
    OutOfRange { index: u64, record_count: u64 },

    #[error("record at index {index} did not decode")]
    MalformedRecord { index: u64 },
}
