//! Portfolio-wide aggregate metrics.
//!
//! Computed on demand over the full account collection; nothing here is
//! cached. Two savings estimators coexist because the dashboard and the
//! analysis view expose them independently: the full per-account analysis
//! and a deliberately conservative haircut estimate. They are not meant to
//! agree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::kiddie_tax::{KiddieTaxCalculator, KiddieTaxError};
use crate::models::{Account, AccountStatus};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_accounts: usize,
    pub over_threshold: usize,
    pub pending_reviews: usize,
    pub total_unrealized_gains: Decimal,
}

/// Computes the dashboard metrics against the given planning threshold.
pub fn portfolio_metrics(
    accounts: &[Account],
    threshold: Decimal,
) -> PortfolioMetrics {
    PortfolioMetrics {
        total_accounts: accounts.len(),
        over_threshold: accounts
            .iter()
            .filter(|a| a.total_unearned_income > threshold)
            .count(),
        pending_reviews: accounts
            .iter()
            .filter(|a| a.status == AccountStatus::PendingReview)
            .count(),
        total_unrealized_gains: accounts.iter().map(|a| a.ytd_unrealized_gains).sum(),
    }
}

/// Conservative "partial realization" haircut applied by the simplified
/// savings estimate. Policy constant, not derived from tax law.
pub fn partial_realization_haircut() -> Decimal {
    Decimal::new(5, 1)
}

/// Aggregate potential savings from the full per-account analysis.
///
/// Sums `potential_savings` over accounts whose total unearned income
/// exceeds the calculator's parent-rate threshold; accounts at or under the
/// threshold contribute nothing.
///
/// # Errors
///
/// Returns [`KiddieTaxError`] if the calculator configuration or the parent
/// rate is invalid.
pub fn analyzed_savings(
    accounts: &[Account],
    calculator: &KiddieTaxCalculator,
    parent_rate: Decimal,
) -> Result<Decimal, KiddieTaxError> {
    let threshold = calculator.thresholds().parent_rate_threshold;
    let mut total = Decimal::ZERO;

    for account in accounts {
        if account.total_unearned_income <= threshold {
            continue;
        }
        let analysis = calculator.analyze(account.total_unearned_income, parent_rate)?;
        total += analysis.potential_savings;
    }

    Ok(round_half_up(total))
}

/// Simplified aggregate savings estimate: `excess × bracket% × 0.5`.
///
/// The 0.5 is [`partial_realization_haircut`] — the estimate assumes only
/// about half of the excess can realistically be eliminated. Kept separate
/// from [`analyzed_savings`]; the two views expose different numbers on
/// purpose.
pub fn haircut_savings(
    accounts: &[Account],
    threshold: Decimal,
    parent_bracket: Decimal,
) -> Decimal {
    let haircut = partial_realization_haircut();
    let total: Decimal = accounts
        .iter()
        .filter(|a| a.total_unearned_income > threshold)
        .map(|a| {
            (a.total_unearned_income - threshold) * parent_bracket / Decimal::ONE_HUNDRED * haircut
        })
        .sum();

    round_half_up(total)
}
