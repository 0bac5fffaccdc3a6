use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Account, AccountStatus, Priority, TaxStrategy};
use crate::store::repository::{AccountRepository, RepositoryError};

/// Vec-backed account store. The whole book lives in memory and is reset on
/// every launch; that is the intended lifecycle, not a missing feature.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Vec<Account>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the standard demonstration book.
    pub fn seeded() -> Self {
        Self {
            accounts: seed_accounts(),
        }
    }
}

impl AccountRepository for MemoryAccountRepository {
    fn list(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    fn get(&self, account_id: &str) -> Result<Account, RepositoryError> {
        self.accounts
            .iter()
            .find(|a| a.account_id == account_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(account_id.to_string()))
    }

    fn insert(&mut self, account: Account) -> Result<(), RepositoryError> {
        if self.accounts.iter().any(|a| a.account_id == account.account_id) {
            return Err(RepositoryError::Duplicate(account.account_id));
        }
        debug!(account_id = %account.account_id, "inserting account");
        self.accounts.push(account);
        Ok(())
    }

    fn update(&mut self, account: Account) -> Result<(), RepositoryError> {
        match self
            .accounts
            .iter_mut()
            .find(|a| a.account_id == account.account_id)
        {
            Some(existing) => {
                debug!(account_id = %account.account_id, "updating account");
                *existing = account;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(account.account_id)),
        }
    }
}

fn seed_review_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, 23)
}

/// The five demonstration accounts.
///
/// Derived fields are carried exactly as recorded at seed time. UTMA002's
/// total of 2,050 excludes its expected distributions; re-deriving these
/// numbers through the save path would change them, so don't.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            account_id: "UTMA001".to_string(),
            minor_name: "John Smith Jr.".to_string(),
            custodian: "John Smith Sr.".to_string(),
            advisor: "Advisor A".to_string(),
            minor_age: 12,
            current_value: Decimal::from(125000),
            ytd_realized_gains: Decimal::from(2100),
            ytd_unrealized_gains: Decimal::from(15000),
            ytd_income: Decimal::from(1800),
            total_unearned_income: Decimal::from(3900),
            remaining_tax_budget: Decimal::from(-1200),
            tax_strategy: TaxStrategy::LossHarvesting,
            priority: Priority::High,
            status: AccountStatus::PendingReview,
            expected_distributions: Decimal::from(1500),
            notes: "Exceeded threshold - need loss harvesting".to_string(),
            last_review_date: seed_review_date(),
        },
        Account {
            account_id: "UTMA002".to_string(),
            minor_name: "Sarah Johnson".to_string(),
            custodian: "Mary Johnson".to_string(),
            advisor: "Advisor B".to_string(),
            minor_age: 15,
            current_value: Decimal::from(89000),
            ytd_realized_gains: Decimal::from(850),
            ytd_unrealized_gains: Decimal::from(8500),
            ytd_income: Decimal::from(1200),
            total_unearned_income: Decimal::from(2050),
            remaining_tax_budget: Decimal::from(650),
            tax_strategy: TaxStrategy::GainHarvesting,
            priority: Priority::Medium,
            status: AccountStatus::PendingReview,
            expected_distributions: Decimal::from(800),
            notes: "Good candidate for gain harvesting".to_string(),
            last_review_date: seed_review_date(),
        },
        Account {
            account_id: "UTMA003".to_string(),
            minor_name: "Michael Davis".to_string(),
            custodian: "Lisa Davis".to_string(),
            advisor: "Advisor A".to_string(),
            minor_age: 8,
            current_value: Decimal::from(45000),
            ytd_realized_gains: Decimal::from(200),
            ytd_unrealized_gains: Decimal::from(4200),
            ytd_income: Decimal::from(600),
            total_unearned_income: Decimal::from(800),
            remaining_tax_budget: Decimal::from(1900),
            tax_strategy: TaxStrategy::GainHarvesting,
            priority: Priority::Low,
            status: AccountStatus::PendingReview,
            expected_distributions: Decimal::from(300),
            notes: "Low income - maximize gains".to_string(),
            last_review_date: seed_review_date(),
        },
        Account {
            account_id: "UTMA004".to_string(),
            minor_name: "Emma Wilson".to_string(),
            custodian: "Tom Wilson".to_string(),
            advisor: "Advisor C".to_string(),
            minor_age: 17,
            current_value: Decimal::from(180000),
            ytd_realized_gains: Decimal::from(3500),
            ytd_unrealized_gains: Decimal::from(22000),
            ytd_income: Decimal::from(2800),
            total_unearned_income: Decimal::from(6300),
            remaining_tax_budget: Decimal::from(-3600),
            tax_strategy: TaxStrategy::LossHarvesting,
            priority: Priority::High,
            status: AccountStatus::PendingReview,
            expected_distributions: Decimal::from(2200),
            notes: "Way over threshold - urgent action needed".to_string(),
            last_review_date: seed_review_date(),
        },
        Account {
            account_id: "UTMA005".to_string(),
            minor_name: "David Brown".to_string(),
            custodian: "Jennifer Brown".to_string(),
            advisor: "Advisor B".to_string(),
            minor_age: 10,
            current_value: Decimal::from(67000),
            ytd_realized_gains: Decimal::from(1200),
            ytd_unrealized_gains: Decimal::from(6800),
            ytd_income: Decimal::from(950),
            total_unearned_income: Decimal::from(2150),
            remaining_tax_budget: Decimal::from(550),
            tax_strategy: TaxStrategy::GainHarvesting,
            priority: Priority::Medium,
            status: AccountStatus::PendingReview,
            expected_distributions: Decimal::from(600),
            notes: "Perfect for gain realization".to_string(),
            last_review_date: seed_review_date(),
        },
    ]
}
