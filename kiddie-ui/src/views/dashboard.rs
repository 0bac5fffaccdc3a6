use std::fmt;

use rust_decimal::Decimal;

use kiddie_core::calculations::portfolio_metrics;
use kiddie_core::models::Account;

use crate::format::format_currency;

/// Headline cards for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_accounts: usize,
    pub over_threshold: usize,
    pub pending_reviews: usize,
    pub total_unrealized: String,
    /// Aggregate potential savings, already formatted. Which estimate feeds
    /// this is a configuration choice made by the caller.
    pub potential_savings: String,
}

pub fn dashboard_summary(
    accounts: &[Account],
    threshold: Decimal,
    potential_savings: Decimal,
) -> DashboardSummary {
    let metrics = portfolio_metrics(accounts, threshold);

    DashboardSummary {
        total_accounts: metrics.total_accounts,
        over_threshold: metrics.over_threshold,
        pending_reviews: metrics.pending_reviews,
        total_unrealized: format_currency(metrics.total_unrealized_gains),
        potential_savings: format_currency(potential_savings),
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Accounts:           {}", self.total_accounts)?;
        writeln!(f, "Over threshold:     {}", self.over_threshold)?;
        writeln!(f, "Pending reviews:    {}", self.pending_reviews)?;
        writeln!(f, "Unrealized gains:   {}", self.total_unrealized)?;
        write!(f, "Potential savings:  {}", self.potential_savings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use kiddie_core::models::planning_threshold_2025;
    use kiddie_core::store::seed_accounts;

    #[test]
    fn summary_over_the_seed_book() {
        let accounts = seed_accounts();

        let summary =
            dashboard_summary(&accounts, planning_threshold_2025(), dec!(864));

        assert_eq!(summary.total_accounts, 5);
        assert_eq!(summary.over_threshold, 2); // UTMA001 and UTMA004
        assert_eq!(summary.pending_reviews, 5);
        assert_eq!(summary.total_unrealized, "$56.5K");
        assert_eq!(summary.potential_savings, "$864");
    }
}
