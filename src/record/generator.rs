//! Synthetic record generation
//!
//! Produces reproducible record sets so every backend can be benchmarked
//! against identical data: pass the same seed, get the same records.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::CurrencyRate;

/// Currency codes cycled through by the generator
pub const CURRENCIES: [&str; 10] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "NZD", "RUB",
];

/// Base currency assigned to every generated record
const BASE_CURRENCY: &str = "USD";

/// Generates synthetic currency-rate records
///
/// Record `i` gets the `i % 10`-th currency code, a timestamp of
/// `base_time + i` hours, and a uniform random rate in `[0.5, 150.5)`.
pub struct RateGenerator {
    rng: StdRng,
    base_time: NaiveDateTime,
}

impl RateGenerator {
    /// Create a generator with the default base time (2024-01-01T00:00:00)
    pub fn new(seed: u64) -> Self {
        Self::with_base_time(seed, default_base_time())
    }

    /// Create a generator with an explicit base time
    pub fn with_base_time(seed: u64, base_time: NaiveDateTime) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            base_time,
        }
    }

    /// Generate `count` records in O(count) time
    pub fn generate(&mut self, count: usize) -> Vec<CurrencyRate> {
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            records.push(CurrencyRate {
                currency_code: CURRENCIES[i % CURRENCIES.len()].to_string(),
                rate: self.rng.gen_range(0.5..150.5),
                timestamp: self.base_time + Duration::hours(i as i64),
                base_currency: BASE_CURRENCY.to_string(),
            });
        }
        records
    }
}

fn default_base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}
