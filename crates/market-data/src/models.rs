//! Wire-level models shared by providers and their callers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spot price for one metal symbol, quoted per troy ounce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotQuote {
    /// Metal symbol, e.g. "XAU"
    pub symbol: String,
    /// Price per troy ounce in `currency`
    pub price_per_oz: Decimal,
    /// Quote currency, e.g. "USD"
    pub currency: String,
    /// When the provider produced the quote
    pub as_of: DateTime<Utc>,
}

impl SpotQuote {
    pub fn new(symbol: String, price_per_oz: Decimal, currency: String) -> Self {
        Self {
            symbol,
            price_per_oz,
            currency,
            as_of: Utc::now(),
        }
    }
}
