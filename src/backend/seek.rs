//! Seek-based backend
//!
//! Baseline strategy: one file handle per operation, one seek + read or
//! write syscall per record. Highest per-record syscall overhead; every
//! other backend is measured against this one.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{FxBenchError, Result};
use crate::record::{decode_record, encode_record, CurrencyRate, RECORD_SIZE};

use super::{record_count, record_offset, FileBackend};

/// Per-record seek + read/write file access
pub struct SeekBackend;

impl FileBackend for SeekBackend {
    fn name(&self) -> &'static str {
        "random-access"
    }

    fn write_records(&self, records: &[CurrencyRate], path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        // One write call per record, on purpose
        for record in records {
            file.write_all(&encode_record(record))?;
        }
        file.sync_all()?;

        debug!(
            "wrote {} records via {} to {}",
            records.len(),
            self.name(),
            path.display()
        );
        Ok(())
    }

    fn read_sequential(&self, path: &Path) -> Result<Vec<CurrencyRate>> {
        let mut file = File::open(path)?;
        let count = record_count(file.metadata()?.len());

        let mut records = Vec::with_capacity(count as usize);
        let mut buf = [0u8; RECORD_SIZE];
        for _ in 0..count {
            file.read_exact(&mut buf)?;
            if let Some(record) = decode_record(&buf) {
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
        let mut file = File::open(path)?;
        let offset = record_offset(index, file.metadata()?.len())?;

        file.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact(&mut buf)?;

        decode_record(&buf).ok_or(FxBenchError::MalformedRecord { index })
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
