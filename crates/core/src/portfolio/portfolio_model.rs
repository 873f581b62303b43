//! Portfolio valuation domain models. Derived per request, never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::purchases::MetalType;

/// Aggregated holdings of one metal, valued at the current price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetalPosition {
    pub metal_type: MetalType,
    /// Total troy ounces held
    pub weight: Decimal,
    /// Total price paid
    pub cost: Decimal,
    /// weight x current price per ounce
    pub current_value: Decimal,
    /// current_value - cost
    pub profit_loss: Decimal,
    /// profit_loss / cost x 100, zero when cost is zero
    pub profit_loss_pct: Decimal,
}

/// The whole portfolio: one position per tracked metal plus totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Positions in [`MetalType::ALL`] order, one per metal.
    pub positions: Vec<MetalPosition>,
    pub total_cost: Decimal,
    pub total_value: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_pct: Decimal,
}

impl PortfolioSummary {
    pub fn position_of(&self, metal: MetalType) -> Option<&MetalPosition> {
        self.positions.iter().find(|p| p.metal_type == metal)
    }
}
