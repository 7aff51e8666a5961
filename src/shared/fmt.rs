//! Money formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents (midpoint away from zero) and render with exactly two
/// fractional digits: `37.5` → `"37.50"`.
pub fn money(value: &Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
