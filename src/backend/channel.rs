//! Channel-buffered backend
//!
//! Accumulates the entire write payload in one in-memory buffer and hands
//! it to the OS in a single write call; reads are positioned per-record
//! reads. Isolates the cost of syscall batching versus per-record I/O.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::prelude::FileExt;
use std::path::Path;

use bytes::{BufMut, BytesMut};
use tracing::debug;

use crate::error::{FxBenchError, Result};
use crate::record::{decode_record, encode_record, CurrencyRate, RECORD_SIZE};

use super::{record_count, record_offset, FileBackend};

/// Batched-write, positioned-read file access
pub struct ChannelBackend;

impl FileBackend for ChannelBackend {
    fn name(&self) -> &'static str {
        "channel-buffered"
    }

    fn write_records(&self, records: &[CurrencyRate], path: &Path) -> Result<()> {
        // Encode everything first so the OS sees exactly one write
        let mut payload = BytesMut::with_capacity(records.len() * RECORD_SIZE);
        for record in records {
            payload.put_slice(&encode_record(record));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&payload)?;
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
        let file = File::open(path)?;
        let count = record_count(file.metadata()?.len());

        let mut records = Vec::with_capacity(count as usize);
        let mut buf = [0u8; RECORD_SIZE];
        for i in 0..count {
            file.read_exact_at(&mut buf, i * RECORD_SIZE as u64)?;
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
        let file = File::open(path)?;
        let offset = record_offset(index, file.metadata()?.len())?;

        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact_at(&mut buf, offset)?;

        decode_record(&buf).ok_or(FxBenchError::MalformedRecord { index })
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
