//! Memory-mapped backend
//!
//! Maps the file's byte range into the process address space: writes are
//! plain memory stores followed by an explicit flush, and both read paths
//! dereference mapped memory with no read syscalls. Isolates virtual
//! memory / page-fault cost versus explicit I/O.
//!
//! A mapping lives only for the duration of the single call that needs it.
//! Retaining one across calls would count as a resource leak: unmap timing
//! is platform-sensitive, and a long-lived mapping would let one trial's
//! page-cache state bleed into the next.

use std::fs::{File, OpenOptions};
use std::path::Path;

use memmap2::{Mmap, MmapMut};
use tracing::debug;

use crate::error::{FxBenchError, Result};
use crate::record::{decode_record, encode_record, CurrencyRate, RECORD_SIZE};

use super::{record_count, record_offset, FileBackend};

/// Memory-mapped file access
pub struct MmapBackend;

impl FileBackend for MmapBackend {
    fn name(&self) -> &'static str {
        "memory-mapped"
    }

    fn write_records(&self, records: &[CurrencyRate], path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.set_len((records.len() * RECORD_SIZE) as u64)?;

        // Mapping a zero-length file fails on some platforms; an empty
        // record set is just the truncated file.
        if records.is_empty() {
            file.sync_all()?;
            return Ok(());
        }

        // SAFETY: the file was just created with truncate=true and the
        // handle is private to this call, so no other mapping or external
        // writer can invalidate the region before it is dropped below.
        let mut mmap = unsafe { MmapMut::map_mut(&file)? };

        for (i, record) in records.iter().enumerate() {
            let start = i * RECORD_SIZE;
            mmap[start..start + RECORD_SIZE].copy_from_slice(&encode_record(record));
        }
        mmap.flush()?;

        debug!(
            "wrote {} records via {} to {}",
            records.len(),
            self.name(),
            path.display()
        );
        Ok(())
    }

    fn read_sequential(&self, path: &Path) -> Result<Vec<CurrencyRate>> {
        let file = File::open(path)?;
        let count = record_count(file.metadata()?.len());
        if count == 0 {
            return Ok(Vec::new());
        }

        // SAFETY: read-only mapping scoped to this call; the benchmark
        // never writes a file it is concurrently reading.
        let mmap = unsafe { Mmap::map(&file)? };

        let mut records = Vec::with_capacity(count as usize);
        for i in 0..count as usize {
            let start = i * RECORD_SIZE;
            if let Some(record) = decode_record(&mmap[start..start + RECORD_SIZE]) {
                records.push(record);
            }
        }

        debug!(
            "read {} records sequentially via {} from {}",
            records.len(),
            self.name(),
            path.display()
        );
        Ok(records)
    }

    fn read_random(&self, path: &Path, index: u64) -> Result<CurrencyRate> {
        let file = File::open(path)?;
        let offset = record_offset(index, file.metadata()?.len())? as usize;

        // SAFETY: read-only mapping scoped to this call.
        let mmap = unsafe { Mmap::map(&file)? };

        decode_record(&mmap[offset..offset + RECORD_SIZE])
            .ok_or(FxBenchError::MalformedRecord { index })
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
