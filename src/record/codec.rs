//! Record codec
//!
//! Encoding and decoding for the fixed-width on-disk record layout.
//!
//! ## Field Slots
//! ```text
//! bytes  0..3    currency code, left-justified
//! bytes  3..18   rate, right-justified fixed-point, 6 fraction digits
//! bytes 18..44   timestamp, ISO text, exactly 26 chars when canonical
//! bytes 44..47   base currency, left-justified
//! bytes 47..100  padding (spaces)
//! ```
//!
//! Encoding is deterministic: the same record always produces the same 100
//! bytes. A field that renders wider than its slot is truncated to the slot
//! width rather than rejected; such records may not decode back (rates
//! needing more than 15 characters, years beyond 4 digits). Decoding fails
//! closed: any slice that is too short or whose rate/timestamp fields do
//! not parse yields `None`, never an error, so bulk scans can skip bad
//! entries without aborting.

use chrono::NaiveDateTime;

use super::CurrencyRate;

/// Size of one encoded record in bytes
pub const RECORD_SIZE: usize = 100;

// Slot boundaries within a record
const CURRENCY_END: usize = 3;
const RATE_END: usize = 18;
const TIMESTAMP_END: usize = 44;
const BASE_END: usize = 47;

/// Canonical timestamp rendering: exactly 26 characters
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Parse format with optional fraction, so second-precision files written
/// by other producers stay readable
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into its fixed 100-byte layout
///
/// Always returns exactly [`RECORD_SIZE`] bytes.
pub fn encode_record(record: &CurrencyRate) -> [u8; RECORD_SIZE] {
    let mut buf = [b' '; RECORD_SIZE];

    put_field(&mut buf[..CURRENCY_END], &record.currency_code);
    put_field(
        &mut buf[CURRENCY_END..RATE_END],
        &format!("{:>15.6}", record.rate),
    );
    put_field(
        &mut buf[RATE_END..TIMESTAMP_END],
        &record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
    );
    put_field(&mut buf[TIMESTAMP_END..BASE_END], &record.base_currency);

    buf
}

/// Copy `text` into `slot`, truncating at the slot width
///
/// The slot is already space-filled, so shorter fields come out padded.
fn put_field(slot: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    let n = bytes.len().min(slot.len());
    slot[..n].copy_from_slice(&bytes[..n]);
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one record from a byte slice
///
/// Returns `None` when the slice is shorter than [`RECORD_SIZE`], when a
/// field is not valid UTF-8, or when the rate or timestamp fields do not
/// parse. Never panics.
pub fn decode_record(bytes: &[u8]) -> Option<CurrencyRate> {
    if bytes.len() < RECORD_SIZE {
        return None;
    }

    let currency_code = field_str(&bytes[..CURRENCY_END])?;
    let rate: f64 = field_str(&bytes[CURRENCY_END..RATE_END])?.parse().ok()?;
    let timestamp = NaiveDateTime::parse_from_str(
        field_str(&bytes[RATE_END..TIMESTAMP_END])?,
        TIMESTAMP_PARSE_FORMAT,
    )
    .ok()?;
    let base_currency = field_str(&bytes[TIMESTAMP_END..BASE_END])?;

    Some(CurrencyRate {
        currency_code: currency_code.to_string(),
        rate,
        timestamp,
        base_currency: base_currency.to_string(),
    })
}

/// Interpret a field slot as trimmed UTF-8 text
fn field_str(slot: &[u8]) -> Option<&str> {
    std::str::from_utf8(slot).ok().map(str::trim)
}
