//! Currency-rate record definition

use chrono::NaiveDateTime;

/// One currency-rate observation
///
/// Immutable once constructed. A record has no identity beyond its
/// position in a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    /// 3-letter currency code, e.g. "EUR"
    pub currency_code: String,

    /// Exchange rate against the base currency
    pub rate: f64,

    /// Observation time (naive; rendered as ISO text on disk)
    pub timestamp: NaiveDateTime,

    /// 3-letter base currency code
    pub base_currency: String,
}

impl CurrencyRate {
    pub fn new(
        currency_code: impl Into<String>,
        rate: f64,
        timestamp: NaiveDateTime,
        base_currency: impl Into<String>,
    ) -> Self {
        Self {
            currency_code: currency_code.into(),
            rate,
            timestamp,
            base_currency: base_currency.into(),
        }
    }
}
