//! Kiddie-tax liability analysis.
//!
//! Implements the piecewise tax-owed function for a minor's unearned income
//! and the derived what-if quantities (optimized tax, potential savings,
//! excess income).
//!
//! # Tax Bands
//!
//! Evaluated against total unearned income:
//!
//! | Band | Condition | Tax owed |
//! |------|-----------|----------|
//! | 1 | `income ≤ tax_free_amount` | 0 |
//! | 2 | `tax_free_amount < income ≤ parent_rate_threshold` | `(income − tax_free_amount) × 10%` |
//! | 3 | `income > parent_rate_threshold` | `child_rate_amount × 10% + (income − parent_rate_threshold) × parent_rate` |
//!
//! Band 2 taxes the *entire* excess over the tax-free amount at the child's
//! flat rate; band 3 instead taxes a *fixed* `child_rate_amount` slice at the
//! child's rate plus everything above the threshold at the parent's rate.
//! This mirrors the real kiddie-tax bracket structure, where the child-rate
//! slice is capped rather than proportional. As long as the thresholds keep
//! the sum invariant (`parent_rate_threshold = tax_free_amount +
//! child_rate_amount`) the two bands meet continuously at the boundary; the
//! capped slice only shows as a jump when that invariant is broken, which
//! [`KiddieTaxCalculator::analyze`] rejects.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use kiddie_core::TaxThresholds;
//! use kiddie_core::calculations::KiddieTaxCalculator;
//!
//! let calculator = KiddieTaxCalculator::new(TaxThresholds::irs_2025());
//! let analysis = calculator.analyze(dec!(6800), dec!(32)).unwrap();
//!
//! // 1350 × 10% + (6800 − 2700) × 32% = 135 + 1312
//! assert_eq!(analysis.current_tax, dec!(1447.00));
//! assert_eq!(analysis.optimized_tax, dec!(135.00));
//! assert_eq!(analysis.potential_savings, dec!(1312.00));
//! assert_eq!(analysis.excess_income, dec!(4100));
//! assert!(!analysis.is_optimized);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TaxThresholds;
use crate::calculations::common::round_half_up;

/// Flat rate applied to the child-taxed slice of unearned income.
fn child_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Errors that can occur during kiddie-tax analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KiddieTaxError {
    /// The tax-free amount must be non-negative.
    #[error("tax-free amount must be non-negative, got {0}")]
    InvalidTaxFreeAmount(Decimal),

    /// The child-rate amount must be non-negative.
    #[error("child-rate amount must be non-negative, got {0}")]
    InvalidChildRateAmount(Decimal),

    /// The parent-rate threshold must equal the sum of the two bracket widths.
    #[error("parent-rate threshold {actual} does not equal tax-free + child-rate amounts ({expected})")]
    ThresholdMismatch { expected: Decimal, actual: Decimal },

    /// Unearned income must be non-negative.
    #[error("unearned income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// The parent marginal rate is a percentage and must be within [0, 100].
    #[error("parent marginal rate must be between 0 and 100, got {0}")]
    ParentRateOutOfRange(Decimal),
}

/// Result of a kiddie-tax what-if analysis.
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAnalysis {
    /// Tax owed at the actual unearned income.
    pub current_tax: Decimal,

    /// Tax owed if income were capped at the parent-rate threshold
    /// (by harvesting losses, deferring distributions, etc.).
    pub optimized_tax: Decimal,

    /// `current_tax − optimized_tax`. Never negative: the tax function is
    /// monotonically non-decreasing.
    pub potential_savings: Decimal,

    /// Unearned income above the parent-rate threshold, floored at zero.
    pub excess_income: Decimal,

    /// True when income is at or below the parent-rate threshold.
    pub is_optimized: bool,
}

/// Calculator for kiddie-tax liability under a fixed threshold configuration.
#[derive(Debug, Clone)]
pub struct KiddieTaxCalculator {
    thresholds: TaxThresholds,
}

impl KiddieTaxCalculator {
    pub fn new(thresholds: TaxThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &TaxThresholds {
        &self.thresholds
    }

    /// Validates the threshold configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KiddieTaxError`] if either bracket width is negative or the
    /// parent-rate threshold does not equal their sum.
    pub fn validate(&self) -> Result<(), KiddieTaxError> {
        let t = &self.thresholds;
        if t.tax_free_amount < Decimal::ZERO {
            return Err(KiddieTaxError::InvalidTaxFreeAmount(t.tax_free_amount));
        }
        if t.child_rate_amount < Decimal::ZERO {
            return Err(KiddieTaxError::InvalidChildRateAmount(t.child_rate_amount));
        }
        let expected = t.tax_free_amount + t.child_rate_amount;
        if t.parent_rate_threshold != expected {
            return Err(KiddieTaxError::ThresholdMismatch {
                expected,
                actual: t.parent_rate_threshold,
            });
        }
        Ok(())
    }

    /// Runs the full what-if analysis for the given unearned income and
    /// parent marginal rate (a percentage in [0, 100]).
    ///
    /// Negative income and out-of-range rates are rejected rather than
    /// clamped; the interactive entry points apply their own input policies
    /// before calling in, so the calculator itself stays strict.
    ///
    /// # Errors
    ///
    /// Returns [`KiddieTaxError`] if the configuration or either input is
    /// outside its documented domain.
    pub fn analyze(
        &self,
        income: Decimal,
        parent_rate: Decimal,
    ) -> Result<TaxAnalysis, KiddieTaxError> {
        self.validate()?;

        if income < Decimal::ZERO {
            return Err(KiddieTaxError::NegativeIncome(income));
        }
        if parent_rate < Decimal::ZERO || parent_rate > Decimal::ONE_HUNDRED {
            return Err(KiddieTaxError::ParentRateOutOfRange(parent_rate));
        }

        let current_tax = self.tax_owed(income, parent_rate);

        // Tax owed if excess income were eliminated entirely.
        let capped_income = income.min(self.thresholds.parent_rate_threshold);
        let optimized_tax = self.tax_owed(capped_income, parent_rate);

        let potential_savings = current_tax - optimized_tax;
        // Monotonicity of the tax function guarantees this; a violation is a
        // calculator bug, not bad input.
        debug_assert!(potential_savings >= Decimal::ZERO);

        let excess_income =
            (income - self.thresholds.parent_rate_threshold).max(Decimal::ZERO);

        Ok(TaxAnalysis {
            current_tax,
            optimized_tax,
            potential_savings,
            excess_income,
            is_optimized: excess_income.is_zero(),
        })
    }

    /// Piecewise tax-owed function over the three bands.
    fn tax_owed(
        &self,
        income: Decimal,
        parent_rate: Decimal,
    ) -> Decimal {
        let t = &self.thresholds;

        if income <= t.tax_free_amount {
            return Decimal::ZERO;
        }

        if income <= t.parent_rate_threshold {
            return round_half_up((income - t.tax_free_amount) * child_rate());
        }

        let child_slice_tax = t.child_rate_amount * child_rate();
        let parent_slice_tax =
            (income - t.parent_rate_threshold) * parent_rate / Decimal::ONE_HUNDRED;
        round_half_up(child_slice_tax + parent_slice_tax)
    }
}
