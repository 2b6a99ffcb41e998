use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for analytics averages
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Calendar date format accepted on the wire for transactions and goal deadlines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month key format (`YYYY-MM`).
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Largest amount accepted for a transaction, budget cap or goal target.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);
