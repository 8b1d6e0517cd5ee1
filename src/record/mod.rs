//! Record Module
//!
//! The fixed-width currency-rate record: domain type, binary codec, and
//! synthetic data generation.
//!
//! ## Record Format (100 bytes, ASCII, space-padded)
//! ```text
//! ┌──────────┬───────────────┬──────────────────────────┬──────────┬─────────┐
//! │ Code (3) │   Rate (15)   │      Timestamp (26)      │ Base (3) │ Pad (53)│
//! └──────────┴───────────────┴──────────────────────────┴──────────┴─────────┘
//! ```
//!
//! A data file is a flat sequence of records with no header, footer, or
//! checksum. `record_count = file_size / 100`, rounding down; a trailing
//! partial record is ignored.

mod rate;
mod codec;
mod generator;

pub use rate::CurrencyRate;
pub use codec::{decode_record, encode_record, RECORD_SIZE};
pub use generator::{RateGenerator, CURRENCIES};
