//! Form state and the two input-validation policies.
//!
//! The account-edit form is **lenient**: anything that does not parse as a
//! number is coerced to zero and the save always goes through. The
//! standalone what-if analysis form is **strict**: non-numeric or
//! non-positive values are rejected with user-visible messages and nothing
//! is computed. The split is deliberate; unifying the two would silently
//! change observed behavior at one entry point or the other.

use rust_decimal::Decimal;

use kiddie_core::calculations::strategy::{self, StrategyInputs, StrategyPreview};
use kiddie_core::models::{Account, NewAccount};

/// Normalizes numeric input: trims whitespace and strips commas
/// (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Lenient numeric parse: empty or unparseable input is zero.
fn parse_or_zero(s: &str) -> Decimal {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "non-numeric input coerced to zero: {}", e);
        Decimal::ZERO
    })
}

fn parse_age_or_zero(s: &str) -> u32 {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return 0;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "non-numeric age coerced to zero: {}", e);
        0
    })
}

/// String-field state of the account add/edit form.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub account_id: String,
    pub minor_name: String,
    pub custodian: String,
    pub advisor: String,
    pub minor_age: String,
    pub current_value: String,
    pub ytd_realized_gains: String,
    pub ytd_unrealized_gains: String,
    pub ytd_income: String,
    pub expected_distributions: String,
    pub notes: String,
}

impl AccountForm {
    /// Pre-populates the form from an existing account for editing.
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.account_id.clone(),
            minor_name: account.minor_name.clone(),
            custodian: account.custodian.clone(),
            advisor: account.advisor.clone(),
            minor_age: account.minor_age.to_string(),
            current_value: account.current_value.to_string(),
            ytd_realized_gains: account.ytd_realized_gains.to_string(),
            ytd_unrealized_gains: account.ytd_unrealized_gains.to_string(),
            ytd_income: account.ytd_income.to_string(),
            expected_distributions: account.expected_distributions.to_string(),
            notes: account.notes.clone(),
        }
    }

    /// Lenient conversion to the raw account fields. Never fails; bad
    /// numerics become zero.
    pub fn to_new_account(&self) -> NewAccount {
        NewAccount {
            account_id: self.account_id.trim().to_string(),
            minor_name: self.minor_name.trim().to_string(),
            custodian: self.custodian.trim().to_string(),
            advisor: self.advisor.trim().to_string(),
            minor_age: parse_age_or_zero(&self.minor_age),
            current_value: parse_or_zero(&self.current_value),
            ytd_realized_gains: parse_or_zero(&self.ytd_realized_gains),
            ytd_unrealized_gains: parse_or_zero(&self.ytd_unrealized_gains),
            ytd_income: parse_or_zero(&self.ytd_income),
            expected_distributions: parse_or_zero(&self.expected_distributions),
            notes: self.notes.trim().to_string(),
        }
    }

    /// Tri-state strategy preview recomputed on every keystroke, using the
    /// same lenient parsing as the save path.
    pub fn live_preview(
        &self,
        threshold: Decimal,
    ) -> StrategyPreview {
        let inputs = StrategyInputs {
            realized_gains: parse_or_zero(&self.ytd_realized_gains),
            ordinary_income: parse_or_zero(&self.ytd_income),
            expected_distributions: parse_or_zero(&self.expected_distributions),
        };
        strategy::preview(&inputs, threshold)
    }
}

/// Validated inputs for the standalone what-if analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub account_value: Decimal,
    pub unearned_income: Decimal,
    pub minor_age: u32,
    pub parent_rate: Decimal,
}

/// String-field state of the standalone analysis form. Strict policy.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub account_value: String,
    pub unearned_income: String,
    pub minor_age: String,
    pub parent_rate: String,

    /// User-visible validation messages from the last `validate` call.
    pub errors: Vec<String>,
}

impl AnalysisForm {
    /// Validates the form, collecting every problem rather than stopping at
    /// the first. On success the parsed inputs are returned; on failure
    /// `self.errors` holds the messages to display and no computation is
    /// attempted.
    pub fn validate(&mut self) -> Result<AnalysisInput, ()> {
        self.errors.clear();

        let account_value = parse_positive(&mut self.errors, "Account value", &self.account_value);
        let unearned_income =
            parse_positive(&mut self.errors, "Unearned income", &self.unearned_income);
        let minor_age = parse_positive_age(&mut self.errors, &self.minor_age);
        let parent_rate = parse_rate(&mut self.errors, &self.parent_rate);

        if !self.errors.is_empty() {
            return Err(());
        }

        Ok(AnalysisInput {
            account_value: account_value.unwrap(),
            unearned_income: unearned_income.unwrap(),
            minor_age: minor_age.unwrap(),
            parent_rate: parent_rate.unwrap(),
        })
    }
}

fn parse_positive(
    errors: &mut Vec<String>,
    field: &str,
    value: &str,
) -> Option<Decimal> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        errors.push(format!("{field} is required"));
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(v) if v > Decimal::ZERO => Some(v),
        Ok(_) => {
            errors.push(format!("{field} must be greater than zero"));
            None
        }
        Err(_) => {
            errors.push(format!("{field} must be a valid number"));
            None
        }
    }
}

fn parse_positive_age(
    errors: &mut Vec<String>,
    value: &str,
) -> Option<u32> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        errors.push("Minor age is required".to_string());
        return None;
    }
    match normalized.parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        Ok(_) => {
            errors.push("Minor age must be greater than zero".to_string());
            None
        }
        Err(_) => {
            errors.push("Minor age must be a whole number".to_string());
            None
        }
    }
}

fn parse_rate(
    errors: &mut Vec<String>,
    value: &str,
) -> Option<Decimal> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        errors.push("Parent marginal rate is required".to_string());
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(v) if v >= Decimal::ZERO && v <= Decimal::ONE_HUNDRED => Some(v),
        Ok(_) => {
            errors.push("Parent marginal rate must be between 0 and 100".to_string());
            None
        }
        Err(_) => {
            errors.push("Parent marginal rate must be a valid number".to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use kiddie_core::models::{TaxStrategy, planning_threshold_2025};

    fn filled_account_form() -> AccountForm {
        AccountForm {
            account_id: "UTMA010".to_string(),
            minor_name: "Alex Doe".to_string(),
            custodian: "Pat Doe".to_string(),
            advisor: "Advisor A".to_string(),
            minor_age: "11".to_string(),
            current_value: "52,000".to_string(),
            ytd_realized_gains: "850".to_string(),
            ytd_unrealized_gains: "3100".to_string(),
            ytd_income: "1200".to_string(),
            expected_distributions: "800".to_string(),
            notes: "new account".to_string(),
        }
    }

    #[test]
    fn account_form_parses_commas_and_trims() {
        let new_account = filled_account_form().to_new_account();

        assert_eq!(new_account.current_value, dec!(52000));
        assert_eq!(new_account.minor_age, 11);
        assert_eq!(new_account.account_id, "UTMA010");
    }

    #[test]
    fn account_form_coerces_bad_numerics_to_zero() {
        let mut form = filled_account_form();
        form.ytd_realized_gains = "abc".to_string();
        form.minor_age = "eleven".to_string();

        let new_account = form.to_new_account();

        assert_eq!(new_account.ytd_realized_gains, dec!(0));
        assert_eq!(new_account.minor_age, 0);
    }

    #[test]
    fn account_form_coerces_empty_numerics_to_zero() {
        let form = AccountForm::default();

        let new_account = form.to_new_account();

        assert_eq!(new_account.current_value, dec!(0));
        assert_eq!(new_account.ytd_income, dec!(0));
    }

    #[test]
    fn live_preview_recomputes_the_tri_state_strategy() {
        let form = filled_account_form();

        // 850 + 1200 + 800 = 2850 against 2700.
        let preview = form.live_preview(planning_threshold_2025());

        assert_eq!(preview.total_unearned_income, dec!(2850));
        assert_eq!(preview.remaining_budget, dec!(-150));
        assert_eq!(preview.strategy, Some(TaxStrategy::LossHarvesting));
    }

    #[test]
    fn live_preview_of_an_empty_form_has_no_strategy() {
        let preview = AccountForm::default().live_preview(Decimal::ZERO);

        assert_eq!(preview.total_unearned_income, dec!(0));
        assert_eq!(preview.strategy, None);
    }

    fn filled_analysis_form() -> AnalysisForm {
        AnalysisForm {
            account_value: "125000".to_string(),
            unearned_income: "6800".to_string(),
            minor_age: "12".to_string(),
            parent_rate: "32".to_string(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn analysis_form_accepts_valid_input() {
        let mut form = filled_analysis_form();

        let input = form.validate().expect("form should validate");

        assert_eq!(input.unearned_income, dec!(6800));
        assert_eq!(input.parent_rate, dec!(32));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn analysis_form_rejects_non_positive_values() {
        let mut form = filled_analysis_form();
        form.account_value = "0".to_string();
        form.unearned_income = "-50".to_string();
        form.minor_age = "0".to_string();

        assert!(form.validate().is_err());
        assert_eq!(
            form.errors,
            vec![
                "Account value must be greater than zero".to_string(),
                "Unearned income must be greater than zero".to_string(),
                "Minor age must be greater than zero".to_string(),
            ]
        );
    }

    #[test]
    fn analysis_form_rejects_non_numeric_values() {
        let mut form = filled_analysis_form();
        form.unearned_income = "lots".to_string();

        assert!(form.validate().is_err());
        assert_eq!(
            form.errors,
            vec!["Unearned income must be a valid number".to_string()]
        );
    }

    #[test]
    fn analysis_form_requires_every_field() {
        let mut form = AnalysisForm::default();

        assert!(form.validate().is_err());
        assert_eq!(form.errors.len(), 4);
    }

    #[test]
    fn analysis_form_validate_is_repeatable_without_accumulating_errors() {
        let mut form = filled_analysis_form();
        form.unearned_income = "lots".to_string();

        assert!(form.validate().is_err());
        assert!(form.validate().is_err());

        assert_eq!(form.errors.len(), 1);
        // The field text itself is untouched by validation.
        assert_eq!(form.unearned_income, "lots");
    }

    #[test]
    fn analysis_form_rejects_out_of_range_rate() {
        let mut form = filled_analysis_form();
        form.parent_rate = "150".to_string();

        assert!(form.validate().is_err());
        assert_eq!(
            form.errors,
            vec!["Parent marginal rate must be between 0 and 100".to_string()]
        );
    }
}
