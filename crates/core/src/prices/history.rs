//! Synthetic price history.
//!
//! The price provider's free tier has no historical endpoint, so the
//! served series is generated by jittering the current price. The data is
//! synthetic and non-authoritative; it exists to feed the dashboard chart
//! and must not be mistaken for a market feed.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::prices::prices_model::HistoricalPrice;

/// Maximum fractional distance of a synthetic point from the base price.
pub const JITTER_SPAN: f64 = 0.05;

/// Source of per-day price jitter, injectable so tests are deterministic.
pub trait JitterSource: Send {
    /// Draw a fractional offset in `[-JITTER_SPAN, JITTER_SPAN]`.
    fn draw(&mut self) -> f64;
}

/// Default jitter source backed by the thread-local RNG.
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_SPAN..=JITTER_SPAN)
    }
}

/// Generate `days` synthetic points ending at `end`, oldest first.
///
/// Each point is the base price scaled by one jitter draw, rounded to
/// display precision.
pub fn synthetic_series(
    base_price: Decimal,
    end: NaiveDate,
    days: i64,
    jitter: &mut dyn JitterSource,
) -> Vec<HistoricalPrice> {
    (0..days)
        .map(|i| {
            let date = end - Duration::days(days - 1 - i);
            let factor = Decimal::from_f64(1.0 + jitter.draw()).unwrap_or(Decimal::ONE);
            HistoricalPrice {
                date,
                price: (base_price * factor).round_dp(DISPLAY_DECIMAL_PRECISION),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct FixedJitter(f64);

    impl JitterSource for FixedJitter {
        fn draw(&mut self) -> f64 {
            self.0
        }
    }

    struct SequenceJitter {
        values: Vec<f64>,
        next: usize,
    }

    impl JitterSource for SequenceJitter {
        fn draw(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_series_shape_and_date_range() {
        let series = synthetic_series(dec!(2000), end_date(), 30, &mut FixedJitter(0.0));
        assert_eq!(series.len(), 30);
        assert_eq!(
            series.first().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 4, 21).unwrap()
        );
        assert_eq!(series.last().unwrap().date, end_date());
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_series_is_deterministic_under_injected_jitter() {
        let mut jitter = SequenceJitter {
            values: vec![0.05, -0.05, 0.0],
            next: 0,
        };
        let series = synthetic_series(dec!(1000), end_date(), 3, &mut jitter);
        let prices: Vec<Decimal> = series.into_iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(1050.00), dec!(950.00), dec!(1000.00)]);
    }

    #[test]
    fn test_series_stays_within_jitter_span() {
        let base = dec!(25.50);
        let lo = base * dec!(0.95);
        let hi = base * dec!(1.05);
        let mut jitter = SequenceJitter {
            values: vec![0.049, -0.049, 0.012, -0.031, 0.0],
            next: 0,
        };
        let series = synthetic_series(base, end_date(), 30, &mut jitter);
        assert!(series.iter().all(|p| p.price >= lo && p.price <= hi));
    }

    #[test]
    fn test_prices_rounded_to_cents() {
        let mut jitter = FixedJitter(0.0123456);
        let series = synthetic_series(dec!(1999.99), end_date(), 5, &mut jitter);
        for point in series {
            assert_eq!(point.price, point.price.round_dp(2));
        }
    }

    #[test]
    fn test_zero_base_price_yields_flat_zero_series() {
        let series = synthetic_series(Decimal::ZERO, end_date(), 30, &mut FixedJitter(0.04));
        assert!(series.iter().all(|p| p.price == Decimal::ZERO));
    }
}
