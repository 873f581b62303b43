//! Spot price client for precious metals.
//!
//! This crate talks to the Metal Price API and exposes the
//! [`MetalQuoteProvider`] trait so callers can swap in test doubles.
//! It knows nothing about persistence or portfolios; it fetches
//! per-ounce USD prices for metal symbols and reports typed errors.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::SpotQuote;
pub use provider::{metal_price_api::MetalPriceApiProvider, MetalQuoteProvider};
