//! Metal Price API provider.
//!
//! Fetches real-time precious metal prices from https://metalpriceapi.com.
//! The API quotes rates in inverse form (1 base currency = `rate` troy
//! ounces of metal), so the per-ounce price is `1 / rate`.
//!
//! Note: the free tier of this API does not support historical data.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::SpotQuote;
use crate::provider::MetalQuoteProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "METAL_PRICE_API";

/// Quote endpoint base URL
const BASE_URL: &str = "https://api.metalpriceapi.com/v1/latest";

/// HTTP request timeout. The upstream is slow to fail when degraded, so the
/// bound is deliberately tight; callers fall back to fixed prices on expiry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// API response from Metal Price API
#[derive(Debug, Deserialize)]
struct MetalPriceResponse {
    /// Whether the request was successful
    success: bool,
    /// Rates for requested metals (1 base_currency = rate troy ounces)
    rates: HashMap<String, f64>,
}

/// Metal Price API provider.
///
/// # Example
///
/// ```ignore
/// use metalfolio_market_data::provider::metal_price_api::MetalPriceApiProvider;
///
/// let provider = MetalPriceApiProvider::new("your_api_key".to_string());
/// ```
pub struct MetalPriceApiProvider {
    client: Client,
    api_key: String,
}

impl MetalPriceApiProvider {
    /// Create a new Metal Price API provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Invert a raw rate into a per-ounce price.
    ///
    /// Rates of zero or below (and symbols the API did not return) price at
    /// zero instead of dividing.
    fn price_from_rate(rate: Option<&f64>) -> Result<Decimal, MarketDataError> {
        match rate {
            Some(r) if *r > 0.0 => {
                Decimal::try_from(1.0 / r).map_err(|_| MarketDataError::ValidationFailed {
                    message: "Failed to convert rate to decimal".to_string(),
                })
            }
            _ => Ok(Decimal::ZERO),
        }
    }

    fn quotes_from_rates(
        rates: &HashMap<String, f64>,
        symbols: &[&str],
        currency: &str,
    ) -> Result<Vec<SpotQuote>, MarketDataError> {
        symbols
            .iter()
            .map(|symbol| {
                let price = Self::price_from_rate(rates.get(*symbol))?;
                Ok(SpotQuote::new(
                    symbol.to_string(),
                    price,
                    currency.to_string(),
                ))
            })
            .collect()
    }
}

#[async_trait]
impl MetalQuoteProvider for MetalPriceApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quotes(
        &self,
        base_currency: &str,
        symbols: &[&str],
    ) -> Result<Vec<SpotQuote>, MarketDataError> {
        let url = format!(
            "{}?api_key={}&base={}&currencies={}",
            BASE_URL,
            self.api_key,
            base_currency,
            symbols.join(",")
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP status {}", status.as_u16()),
            });
        }

        let metal_resp: MetalPriceResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        if !metal_resp.success {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "API request failed".to_string(),
            });
        }

        Self::quotes_from_rates(&metal_resp.rates, symbols, base_currency)
    }
}
