//! Prices module - current quotes and the synthetic history series.

mod history;
mod prices_model;
mod prices_service;


pub use history::{synthetic_series, JitterSource, ThreadRngJitter, JITTER_SPAN};
pub use prices_model::{HistoricalPrice, MetalPrices};
pub use prices_service::{PriceService, PriceServiceTrait, PriceSourceConfig};
