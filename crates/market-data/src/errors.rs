//! Error types for spot price operations.

use thiserror::Error;

/// Errors that can occur while fetching spot prices.
///
/// Callers that need graceful degradation (the price service falls back to
/// a fixed table) treat every variant the same way; the split exists so the
/// failure is logged with the right shape.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered but signalled failure (non-2xx status or a
    /// `success: false` payload).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
