//! Display formatting shared by every view.

use rust_decimal::Decimal;

/// Formats a dollar amount for display.
///
/// * Zero renders as `$0`.
/// * Magnitudes of $1,000 and up are abbreviated to thousands with a single
///   half-up decimal: `$3.9K`, `$-1.2K`.
/// * Everything else renders as plain dollars with no padding: `$650`.
///
/// Every view goes through this function so the same amount never renders
/// two different ways.
pub fn format_currency(amount: Decimal) -> String {
    if amount.is_zero() {
        return "$0".to_string();
    }
    if amount.abs() >= Decimal::from(1000) {
        let thousands = (amount / Decimal::from(1000))
            .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        return format!("${thousands:.1}K");
    }
    format!("${}", amount.normalize())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_renders_bare() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(0.00)), "$0");
    }

    #[test]
    fn small_amounts_render_as_plain_dollars() {
        assert_eq!(format_currency(dec!(650)), "$650");
        assert_eq!(format_currency(dec!(-550)), "$-550");
        assert_eq!(format_currency(dec!(999.5)), "$999.5");
    }

    #[test]
    fn thousands_are_abbreviated_with_one_decimal() {
        assert_eq!(format_currency(dec!(3900)), "$3.9K");
        assert_eq!(format_currency(dec!(125000)), "$125.0K");
        assert_eq!(format_currency(dec!(1000)), "$1.0K");
    }

    #[test]
    fn negative_thousands_keep_the_sign_inside() {
        assert_eq!(format_currency(dec!(-1200)), "$-1.2K");
        assert_eq!(format_currency(dec!(-3600)), "$-3.6K");
    }

    #[test]
    fn abbreviation_rounds_half_up() {
        assert_eq!(format_currency(dec!(2050)), "$2.1K");
        assert_eq!(format_currency(dec!(2049)), "$2.0K");
    }
}
