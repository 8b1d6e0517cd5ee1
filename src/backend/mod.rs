//! Backend Module
//!
//! Three interchangeable file-access strategies over the fixed record
//! layout. All variants implement the same observable contract and differ
//! only in their I/O pattern, which is what the benchmark compares.
//!
//! ## Contract
//! - `write_records`: create or truncate the file, encode all records in
//!   input order into one contiguous stream, flush durably, and release
//!   every handle before returning.
//! - `read_sequential`: decode every 100-byte slice in ascending offset
//!   order; slices that fail to decode are skipped, never fatal.
//! - `read_random`: read exactly one record at `index * 100`; an index at
//!   or past the record count is an OutOfRange error.
//! - `file_size`: byte length of the file.
//!
//! Every file handle and memory mapping is scoped to a single call and
//! released on all exit paths; nothing is cached across operations.

mod seek;
mod channel;
mod mmap;

pub use seek::SeekBackend;
pub use channel::ChannelBackend;
pub use mmap::MmapBackend;

use std::path::Path;

use crate::error::{FxBenchError, Result};
use crate::record::{CurrencyRate, RECORD_SIZE};

/// Common capability implemented by all three file-access strategies
pub trait FileBackend {
    /// Backend name, used in results and log lines
    fn name(&self) -> &'static str;

    /// Serialize all records into the file in input order, durably
    fn write_records(&self, records: &[CurrencyRate], path: &Path) -> Result<()>;

    /// Decode every whole record in ascending offset order
    fn read_sequential(&self, path: &Path) -> Result<Vec<CurrencyRate>>;

    /// Decode the single record at the given index
    fn read_random(&self, path: &Path, index: u64) -> Result<CurrencyRate>;

    /// Byte length of the file
    fn file_size(&self, path: &Path) -> Result<u64>;
}

/// Backend selector
///
/// Selection is configuration-driven; the harness only ever sees
/// `&dyn FileBackend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Per-record seek + read/write syscalls (baseline)
    RandomAccess,

    /// One batched write call, positioned per-record reads
    Channel,

    /// Memory-mapped stores and loads
    Mmap,
}

impl BackendKind {
    /// All backends, in canonical trial order
    pub const ALL: [BackendKind; 3] = [
        BackendKind::RandomAccess,
        BackendKind::Channel,
        BackendKind::Mmap,
    ];

    /// Instantiate the selected backend
    pub fn create(&self) -> Box<dyn FileBackend> {
        match self {
            BackendKind::RandomAccess => Box::new(SeekBackend),
            BackendKind::Channel => Box::new(ChannelBackend),
            BackendKind::Mmap => Box::new(MmapBackend),
        }
    }

    /// Stem used for this backend's data files, e.g. "channel_50000.dat"
    pub fn file_stem(&self) -> &'static str {
        match self {
            BackendKind::RandomAccess => "random_access",
            BackendKind::Channel => "channel",
            BackendKind::Mmap => "mmap",
        }
    }
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Number of whole records in a file of `file_size` bytes
///
/// A trailing partial record is excluded, not an error.
pub fn record_count(file_size: u64) -> u64 {
    file_size / RECORD_SIZE as u64
}

/// Byte offset of record `index`, or OutOfRange if the file holds no
/// whole record at that index
pub(crate) fn record_offset(index: u64, file_size: u64) -> Result<u64> {
    let count = record_count(file_size);
    if index >= count {
        return Err(FxBenchError::OutOfRange {
            index,
            record_count: count,
        });
    }
    Ok(index * RECORD_SIZE as u64)
}
