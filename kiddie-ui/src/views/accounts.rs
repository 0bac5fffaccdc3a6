use std::fmt;

use rust_decimal::Decimal;

use kiddie_core::models::{Account, Priority, TaxStrategy};

use crate::format::format_currency;

/// A formatted currency value plus the sign flag the table uses for
/// red/green styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCell {
    pub text: String,
    pub negative: bool,
}

impl CurrencyCell {
    pub fn new(amount: Decimal) -> Self {
        Self {
            text: format_currency(amount),
            negative: amount < Decimal::ZERO,
        }
    }
}

/// One row of the accounts table, fully formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub account_id: String,
    pub minor_name: String,
    pub custodian: String,
    pub advisor: String,
    pub current_value: String,
    pub realized_gains: CurrencyCell,
    pub unrealized_gains: CurrencyCell,
    pub total_unearned_income: String,
    pub remaining_tax_budget: CurrencyCell,
    pub tax_strategy: String,
    pub priority: String,
    pub status: String,
}

impl AccountRow {
    fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.account_id.clone(),
            minor_name: account.minor_name.clone(),
            custodian: account.custodian.clone(),
            advisor: account.advisor.clone(),
            current_value: format_currency(account.current_value),
            realized_gains: CurrencyCell::new(account.ytd_realized_gains),
            unrealized_gains: CurrencyCell::new(account.ytd_unrealized_gains),
            total_unearned_income: format_currency(account.total_unearned_income),
            remaining_tax_budget: CurrencyCell::new(account.remaining_tax_budget),
            tax_strategy: account.tax_strategy.as_str().to_string(),
            priority: account.priority.as_str().to_string(),
            status: account.status.as_str().to_string(),
        }
    }
}

impl fmt::Display for AccountRow {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {}",
            self.account_id,
            self.minor_name,
            self.advisor,
            self.current_value,
            self.total_unearned_income,
            self.remaining_tax_budget.text,
            self.tax_strategy,
            self.priority,
        )
    }
}

/// Table filters. `None` means "show everything" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilter {
    pub advisor: Option<String>,
    pub priority: Option<Priority>,
    pub strategy: Option<TaxStrategy>,
}

impl AccountFilter {
    pub fn matches(
        &self,
        account: &Account,
    ) -> bool {
        self.advisor
            .as_ref()
            .is_none_or(|advisor| &account.advisor == advisor)
            && self.priority.is_none_or(|p| account.priority == p)
            && self.strategy.is_none_or(|s| account.tax_strategy == s)
    }
}

/// Builds the filtered, formatted account table in store order.
pub fn account_rows(
    accounts: &[Account],
    filter: &AccountFilter,
) -> Vec<AccountRow> {
    accounts
        .iter()
        .filter(|a| filter.matches(a))
        .map(AccountRow::from_account)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use kiddie_core::store::seed_accounts;

    #[test]
    fn unfiltered_table_shows_every_account() {
        let rows = account_rows(&seed_accounts(), &AccountFilter::default());

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].account_id, "UTMA001");
    }

    #[test]
    fn rows_carry_formatted_currency_and_sign_flags() {
        let rows = account_rows(&seed_accounts(), &AccountFilter::default());

        let first = &rows[0];
        assert_eq!(first.current_value, "$125.0K");
        assert_eq!(first.remaining_tax_budget.text, "$-1.2K");
        assert!(first.remaining_tax_budget.negative);
        assert!(!first.realized_gains.negative);
    }

    #[test]
    fn advisor_filter_narrows_the_table() {
        let filter = AccountFilter {
            advisor: Some("Advisor B".to_string()),
            ..Default::default()
        };

        let rows = account_rows(&seed_accounts(), &filter);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.advisor == "Advisor B"));
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filter = AccountFilter {
            advisor: Some("Advisor A".to_string()),
            priority: Some(Priority::High),
            strategy: Some(TaxStrategy::LossHarvesting),
        };

        let rows = account_rows(&seed_accounts(), &filter);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_id, "UTMA001");
    }

    #[test]
    fn empty_filter_dimension_matches_all_values() {
        let filter = AccountFilter {
            strategy: Some(TaxStrategy::GainHarvesting),
            ..Default::default()
        };

        let rows = account_rows(&seed_accounts(), &filter);

        assert_eq!(rows.len(), 3);
    }
}
