//! Price domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::purchases::MetalType;
use metalfolio_market_data::SpotQuote;

/// Current per-ounce USD prices for the four tracked metals.
///
/// Always complete: one price per metal, zero when a live quote could not
/// be inverted. Ephemeral, fetched fresh per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetalPrices {
    pub gold: Decimal,
    pub silver: Decimal,
    pub platinum: Decimal,
    pub palladium: Decimal,
}

impl MetalPrices {
    /// Fixed prices used whenever no live quote is available.
    pub fn fallback() -> Self {
        Self {
            gold: dec!(2050.00),
            silver: dec!(25.50),
            platinum: dec!(950.00),
            palladium: dec!(1050.00),
        }
    }

    pub fn price_of(&self, metal: MetalType) -> Decimal {
        match metal {
            MetalType::Gold => self.gold,
            MetalType::Silver => self.silver,
            MetalType::Platinum => self.platinum,
            MetalType::Palladium => self.palladium,
        }
    }

    fn set(&mut self, metal: MetalType, price: Decimal) {
        match metal {
            MetalType::Gold => self.gold = price,
            MetalType::Silver => self.silver = price,
            MetalType::Platinum => self.platinum = price,
            MetalType::Palladium => self.palladium = price,
        }
    }

    /// Build from provider quotes. Symbols that are missing or not a
    /// tracked metal leave that metal at zero.
    pub fn from_quotes(quotes: &[SpotQuote]) -> Self {
        let mut prices = Self::default();
        for quote in quotes {
            if let Some(metal) = MetalType::ALL
                .iter()
                .find(|m| m.symbol() == quote.symbol)
            {
                prices.set(*metal, quote.price_per_oz);
            }
        }
        prices
    }
}

/// One point of the synthetic price history series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    pub date: NaiveDate,
    pub price: Decimal,
}
