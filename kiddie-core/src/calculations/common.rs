//! Shared helpers for monetary calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use kiddie_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(135.235)), dec!(135.24));
/// assert_eq!(round_half_up(dec!(135.234)), dec!(135.23));
/// assert_eq!(round_half_up(dec!(-135.235)), dec!(-135.24)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
