//! Spot price providers.

pub mod metal_price_api;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::SpotQuote;

/// A source of current per-ounce metal prices.
///
/// Implementations fetch the latest quote for every requested symbol in a
/// single call. A missing or unusable rate for a symbol is reported as a
/// zero-priced quote rather than an error, so one bad symbol does not sink
/// the batch; transport and protocol failures are errors.
#[async_trait]
pub trait MetalQuoteProvider: Send + Sync {
    /// Stable identifier used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the latest quotes for `symbols`, priced in `base_currency`.
    async fn latest_quotes(
        &self,
        base_currency: &str,
        symbols: &[&str],
    ) -> Result<Vec<SpotQuote>, MarketDataError>;
}
