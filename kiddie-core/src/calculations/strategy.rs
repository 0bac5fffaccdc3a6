//! Harvesting-strategy recommendation rules.
//!
//! Two deliberately separate rules consume the same inputs:
//!
//! * [`recommend`] — the save-path rule. Binary: any account at or over the
//!   threshold gets Loss Harvesting at High priority.
//! * [`preview`] — the live-form rule shown while income fields are being
//!   edited. Tri-state: a remaining budget of exactly zero reports no
//!   strategy at all, which is what an untouched form (all inputs zero
//!   against a zero threshold) displays as "N/A".
//!
//! Do not unify them; they intentionally disagree at a zero budget.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, TaxStrategy};

/// Income inputs feeding the strategy rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyInputs {
    pub realized_gains: Decimal,
    pub ordinary_income: Decimal,
    pub expected_distributions: Decimal,
}

impl StrategyInputs {
    /// Total unearned income: realized gains + ordinary income + expected
    /// distributions.
    pub fn total_unearned_income(&self) -> Decimal {
        self.realized_gains + self.ordinary_income + self.expected_distributions
    }
}

/// Outcome of the binary save-path rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    pub total_unearned_income: Decimal,
    pub remaining_budget: Decimal,
    pub strategy: TaxStrategy,
    pub priority: Priority,
}

/// Outcome of the tri-state live-form rule. `strategy` is `None` when the
/// remaining budget is exactly zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPreview {
    pub total_unearned_income: Decimal,
    pub remaining_budget: Decimal,
    pub strategy: Option<TaxStrategy>,
}

/// Budget above which a gain-harvesting account is only Low priority.
fn low_priority_budget() -> Decimal {
    Decimal::from(1000)
}

/// Recommends a strategy and priority for an account being saved.
///
/// Remaining budget > 0 recommends Gain Harvesting (Low priority when the
/// budget exceeds $1,000, Medium otherwise); a budget of zero or less
/// recommends Loss Harvesting at High priority.
pub fn recommend(
    inputs: &StrategyInputs,
    threshold: Decimal,
) -> StrategyRecommendation {
    let total_unearned_income = inputs.total_unearned_income();
    let remaining_budget = threshold - total_unearned_income;

    let (strategy, priority) = if remaining_budget > Decimal::ZERO {
        let priority = if remaining_budget > low_priority_budget() {
            Priority::Low
        } else {
            Priority::Medium
        };
        (TaxStrategy::GainHarvesting, priority)
    } else {
        (TaxStrategy::LossHarvesting, Priority::High)
    };

    StrategyRecommendation {
        total_unearned_income,
        remaining_budget,
        strategy,
        priority,
    }
}

/// Live preview of the strategy while the form is being edited.
///
/// Unlike [`recommend`], a remaining budget of exactly zero yields no
/// strategy (rendered as "N/A"), so an empty form does not claim a
/// recommendation.
pub fn preview(
    inputs: &StrategyInputs,
    threshold: Decimal,
) -> StrategyPreview {
    let total_unearned_income = inputs.total_unearned_income();
    let remaining_budget = threshold - total_unearned_income;

    let strategy = if remaining_budget > Decimal::ZERO {
        Some(TaxStrategy::GainHarvesting)
    } else if remaining_budget < Decimal::ZERO {
        Some(TaxStrategy::LossHarvesting)
    } else {
        None
    };

    StrategyPreview {
        total_unearned_income,
        remaining_budget,
        strategy,
    }
}
