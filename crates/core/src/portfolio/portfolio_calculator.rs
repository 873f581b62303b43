//! Portfolio aggregation.
//!
//! A pure fold over purchase records and a price table. Records carry a
//! parsed [`MetalType`] (enforced at insert), so every record lands in one
//! of the four positions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::portfolio_model::{MetalPosition, PortfolioSummary};
use crate::prices::MetalPrices;
use crate::purchases::{MetalType, Purchase};

/// profit / cost x 100, with the zero-cost guard.
fn profit_loss_pct(profit_loss: Decimal, cost: Decimal) -> Decimal {
    if cost > Decimal::ZERO {
        profit_loss / cost * dec!(100)
    } else {
        Decimal::ZERO
    }
}

/// Aggregate purchases into per-metal positions and portfolio totals.
pub fn aggregate(purchases: &[Purchase], prices: &MetalPrices) -> PortfolioSummary {
    let mut total_cost = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;

    let positions = MetalType::ALL
        .iter()
        .map(|metal| {
            let (weight, cost) = purchases
                .iter()
                .filter(|p| p.metal_type == *metal)
                .fold((Decimal::ZERO, Decimal::ZERO), |(weight, cost), p| {
                    (weight + p.weight_oz, cost + p.price_paid)
                });

            let current_value = weight * prices.price_of(*metal);
            let profit_loss = current_value - cost;

            total_cost += cost;
            total_value += current_value;

            MetalPosition {
                metal_type: *metal,
                weight,
                cost,
                current_value,
                profit_loss,
                profit_loss_pct: profit_loss_pct(profit_loss, cost),
            }
        })
        .collect();

    let total_profit_loss = total_value - total_cost;
    PortfolioSummary {
        positions,
        total_cost,
        total_value,
        total_profit_loss,
        total_profit_loss_pct: profit_loss_pct(total_profit_loss, total_cost),
    }
}
