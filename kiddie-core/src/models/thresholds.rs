use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kiddie-tax bracket thresholds for a single tax year.
///
/// The brackets stack: the first `tax_free_amount` of unearned income is
/// exempt, the next `child_rate_amount` is taxed at the child's own rate,
/// and everything above `parent_rate_threshold` is taxed at the parent's
/// marginal rate.
///
/// Invariant: `parent_rate_threshold = tax_free_amount + child_rate_amount`.
/// Construct through [`TaxThresholds::new`] (or a preset) to keep it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxThresholds {
    /// Unearned income exempt from any tax (first bracket ceiling).
    pub tax_free_amount: Decimal,

    /// Slice of income taxed at the child's own flat rate.
    pub child_rate_amount: Decimal,

    /// Total unearned income above which the excess is taxed at the
    /// parent's marginal rate.
    pub parent_rate_threshold: Decimal,
}

impl TaxThresholds {
    /// Creates thresholds from the two bracket widths, deriving the
    /// parent-rate threshold as their sum.
    pub fn new(
        tax_free_amount: Decimal,
        child_rate_amount: Decimal,
    ) -> Self {
        Self {
            tax_free_amount,
            child_rate_amount,
            parent_rate_threshold: tax_free_amount + child_rate_amount,
        }
    }

    /// 2025 kiddie-tax brackets: $1,350 tax free, $1,350 at the child's
    /// rate, parent rate above $2,700.
    ///
    /// Used by the standalone what-if analysis view.
    pub fn irs_2025() -> Self {
        Self::new(Decimal::from(1350), Decimal::from(1350))
    }
}

/// Flat $2,700 planning threshold used by the account-edit strategy rule.
///
/// This is a distinct configuration from [`TaxThresholds::irs_2025`], not a
/// shorthand for it: the strategy rule compares total unearned income against
/// a single number and never looks at the bracket split. The two presets are
/// deliberately kept separate.
pub fn planning_threshold_2025() -> Decimal {
    Decimal::from(2700)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_derives_parent_rate_threshold() {
        let thresholds = TaxThresholds::new(dec!(1000), dec!(2000));

        assert_eq!(thresholds.parent_rate_threshold, dec!(3000));
    }

    #[test]
    fn irs_2025_preset_matches_published_brackets() {
        let thresholds = TaxThresholds::irs_2025();

        assert_eq!(thresholds.tax_free_amount, dec!(1350));
        assert_eq!(thresholds.child_rate_amount, dec!(1350));
        assert_eq!(thresholds.parent_rate_threshold, dec!(2700));
    }

    #[test]
    fn planning_threshold_matches_2025_total() {
        assert_eq!(planning_threshold_2025(), dec!(2700));
    }
}
