//! Portfolio module - aggregation of purchases into valued positions.

mod portfolio_calculator;
mod portfolio_model;


pub use portfolio_calculator::aggregate;
pub use portfolio_model::{MetalPosition, PortfolioSummary};
