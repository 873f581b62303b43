/// Quote currency for all price lookups
pub const BASE_CURRENCY: &str = "USD";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Days of synthetic price history served per metal
pub const HISTORY_DAYS: i64 = 30;
