//! Numeric guard rails: safe parsing, money rounding, guarded division.
//!
//! User-facing inputs arrive as free text and follow a silent-fallback
//! policy: anything that does not parse as a number is coerced to zero so
//! a half-typed odd never aborts a computation. The coercion lives here,
//! decoupled from the engine arithmetic, which only ever sees `Decimal`
//! values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse free text into a `Decimal`, coercing empty or malformed input to zero.
pub fn safe_parse(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Round a monetary or percentage value to two decimal places.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divide, substituting zero when the denominator is zero or the quotient
/// overflows.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
