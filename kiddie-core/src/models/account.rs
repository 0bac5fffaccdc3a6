use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxStrategy {
    GainHarvesting,
    LossHarvesting,
}

impl TaxStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GainHarvesting => "Gain Harvesting",
            Self::LossHarvesting => "Loss Harvesting",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Gain Harvesting" => Some(Self::GainHarvesting),
            "Loss Harvesting" => Some(Self::LossHarvesting),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    PendingReview,
    InProgress,
    ReviewComplete,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "Pending Review",
            Self::InProgress => "In Progress",
            Self::ReviewComplete => "Review Complete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending Review" => Some(Self::PendingReview),
            "In Progress" => Some(Self::InProgress),
            "Review Complete" => Some(Self::ReviewComplete),
            _ => None,
        }
    }
}

/// A UTMA/UGMA custodial account under kiddie-tax review.
///
/// `total_unearned_income`, `remaining_tax_budget`, `tax_strategy` and
/// `priority` are derived fields, recomputed whenever the income inputs
/// change. Seeded accounts carry their derived values as recorded at seed
/// time rather than recomputing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub minor_name: String,
    pub custodian: String,
    pub advisor: String,
    pub minor_age: u32,
    pub current_value: Decimal,
    pub ytd_realized_gains: Decimal,
    pub ytd_unrealized_gains: Decimal,
    pub ytd_income: Decimal,
    pub total_unearned_income: Decimal,
    pub remaining_tax_budget: Decimal,
    pub tax_strategy: TaxStrategy,
    pub priority: Priority,
    pub status: AccountStatus,
    pub expected_distributions: Decimal,
    pub notes: String,
    pub last_review_date: Option<NaiveDate>,
}

/// The raw editable fields of an account, before derived fields are
/// recomputed on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub account_id: String,
    pub minor_name: String,
    pub custodian: String,
    pub advisor: String,
    pub minor_age: u32,
    pub current_value: Decimal,
    pub ytd_realized_gains: Decimal,
    pub ytd_unrealized_gains: Decimal,
    pub ytd_income: Decimal,
    pub expected_distributions: Decimal,
    pub notes: String,
}
