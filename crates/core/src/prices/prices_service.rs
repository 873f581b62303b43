use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use super::history::{synthetic_series, JitterSource, ThreadRngJitter};
use super::prices_model::{HistoricalPrice, MetalPrices};
use crate::constants::{BASE_CURRENCY, HISTORY_DAYS};
use crate::purchases::MetalType;
use metalfolio_market_data::{MetalPriceApiProvider, MetalQuoteProvider};

/// Configuration for the price source, passed in at construction so both
/// branches (live and fallback) are reachable in tests without touching
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct PriceSourceConfig {
    /// Metal Price API key; `None` (or blank) selects fallback mode.
    pub api_key: Option<String>,
}

/// Trait for price service operations
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Current per-ounce prices. Never fails: any provider problem
    /// degrades to the fixed fallback table.
    async fn get_prices(&self) -> MetalPrices;

    /// Synthetic 30-day history for one metal, oldest first.
    async fn get_history(&self, metal: MetalType) -> Vec<HistoricalPrice>;
}

/// Service producing current prices with graceful degradation.
pub struct PriceService {
    provider: Option<Arc<dyn MetalQuoteProvider>>,
    jitter: Mutex<Box<dyn JitterSource>>,
}

impl PriceService {
    pub fn new(config: PriceSourceConfig) -> Self {
        let provider = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| Arc::new(MetalPriceApiProvider::new(key)) as Arc<dyn MetalQuoteProvider>);
        Self::with_parts(provider, Box::new(ThreadRngJitter))
    }

    /// Assemble from explicit parts; used by tests to inject doubles.
    pub fn with_parts(
        provider: Option<Arc<dyn MetalQuoteProvider>>,
        jitter: Box<dyn JitterSource>,
    ) -> Self {
        Self {
            provider,
            jitter: Mutex::new(jitter),
        }
    }

    /// Whether a live provider is configured.
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_prices(&self) -> MetalPrices {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => {
                debug!("No price API credential configured, serving fallback prices");
                return MetalPrices::fallback();
            }
        };

        let symbols: Vec<&str> = MetalType::ALL.iter().map(|m| m.symbol()).collect();
        match provider.latest_quotes(BASE_CURRENCY, &symbols).await {
            Ok(quotes) => MetalPrices::from_quotes(&quotes),
            Err(e) => {
                warn!(
                    "Price fetch from {} failed ({}), serving fallback prices",
                    provider.id(),
                    e
                );
                MetalPrices::fallback()
            }
        }
    }

    async fn get_history(&self, metal: MetalType) -> Vec<HistoricalPrice> {
        let base_price = self.get_prices().await.price_of(metal);
        let today = Utc::now().date_naive();
        let mut jitter = self.jitter.lock().unwrap();
        synthetic_series(base_price, today, HISTORY_DAYS, jitter.as_mut())
    }
}
