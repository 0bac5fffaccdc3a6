//! Headless application state for the dashboard.
//!
//! Owns the account store, the workflow phases, and the active view.
//! Every user interaction maps to one synchronous method here; the
//! presentation host calls in, re-renders from the returned render models,
//! and nothing runs in the background.

use rust_decimal::Decimal;
use tracing::warn;

use kiddie_core::calculations::{
    KiddieTaxCalculator, TaxAnalysis, analyzed_savings, haircut_savings, strategy,
    strategy::StrategyInputs,
};
use kiddie_core::models::{Account, AccountStatus, PhaseStatus, WorkflowPhase, seed_phases};
use kiddie_core::store::{AccountRepository, MemoryAccountRepository, RepositoryError};

use crate::config::{AppConfig, SavingsPolicy};
use crate::forms::{AccountForm, AnalysisForm};
use crate::views::{
    AccountFilter, AccountRow, DashboardSummary, ReportTable, WorkflowPhaseView, account_rows,
    compliance_report, dashboard_summary, gains_report, phase_views, status_report,
    threshold_report,
};

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Accounts,
    Workflow,
    Reports,
    Analysis,
}

/// A canned report the reports view can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Threshold,
    Gains,
    Status,
    Compliance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

pub struct DashboardApp {
    config: AppConfig,
    repo: MemoryAccountRepository,
    phases: Vec<WorkflowPhase>,
    pub filter: AccountFilter,
    current_view: View,
    /// Id of the account being edited, if the form was opened on one.
    editing: Option<String>,
    status_message: Option<(String, MessageType)>,
}

impl DashboardApp {
    /// App over the standard demonstration book.
    pub fn seeded(config: AppConfig) -> Self {
        Self::with_repository(config, MemoryAccountRepository::seeded())
    }

    pub fn with_repository(
        config: AppConfig,
        repo: MemoryAccountRepository,
    ) -> Self {
        Self {
            config,
            repo,
            phases: seed_phases(),
            filter: AccountFilter::default(),
            current_view: View::default(),
            editing: None,
            status_message: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn set_view(
        &mut self,
        view: View,
    ) {
        self.current_view = view;
    }

    pub fn status_message(&self) -> Option<&(String, MessageType)> {
        self.status_message.as_ref()
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Snapshot of the full book.
    pub fn accounts(&self) -> Vec<Account> {
        self.repo.list()
    }

    // ─── account editing (lenient path) ──────────────────────────────────

    /// Opens the form empty for a new account.
    pub fn begin_add(&mut self) -> AccountForm {
        self.editing = None;
        AccountForm::default()
    }

    /// Opens the form pre-populated from an existing account. The id is
    /// fixed for the duration of the edit.
    pub fn begin_edit(
        &mut self,
        account_id: &str,
    ) -> Result<AccountForm, RepositoryError> {
        let account = self.repo.get(account_id)?;
        self.editing = Some(account_id.to_string());
        Ok(AccountForm::from_account(&account))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves the form through the lenient policy: numerics that fail to
    /// parse are zero, derived fields are recomputed, and the account lands
    /// back in Pending Review.
    pub fn save_account(
        &mut self,
        form: &AccountForm,
    ) -> Result<Account, RepositoryError> {
        let new_account = form.to_new_account();

        let recommendation = strategy::recommend(
            &StrategyInputs {
                realized_gains: new_account.ytd_realized_gains,
                ordinary_income: new_account.ytd_income,
                expected_distributions: new_account.expected_distributions,
            },
            self.config.planning_threshold,
        );

        let (account_id, last_review_date) = match &self.editing {
            // Editing keeps the original id and review history.
            Some(id) => (id.clone(), self.repo.get(id)?.last_review_date),
            None => (new_account.account_id.clone(), None),
        };

        let account = Account {
            account_id,
            minor_name: new_account.minor_name,
            custodian: new_account.custodian,
            advisor: new_account.advisor,
            minor_age: new_account.minor_age,
            current_value: new_account.current_value,
            ytd_realized_gains: new_account.ytd_realized_gains,
            ytd_unrealized_gains: new_account.ytd_unrealized_gains,
            ytd_income: new_account.ytd_income,
            total_unearned_income: recommendation.total_unearned_income,
            remaining_tax_budget: recommendation.remaining_budget,
            tax_strategy: recommendation.strategy,
            priority: recommendation.priority,
            status: AccountStatus::PendingReview,
            expected_distributions: new_account.expected_distributions,
            notes: new_account.notes,
            last_review_date,
        };

        if self.editing.is_some() {
            self.repo.update(account.clone())?;
        } else {
            self.repo.insert(account.clone())?;
        }

        self.editing = None;
        self.show_message(
            format!("Account {} saved", account.account_id),
            MessageType::Success,
        );
        Ok(account)
    }

    // ─── workflow tracker ────────────────────────────────────────────────

    /// Advances a phase through its status cycle. Out-of-range indices are
    /// ignored with a warning.
    pub fn toggle_phase(
        &mut self,
        phase_index: usize,
    ) -> Option<PhaseStatus> {
        match self.phases.get_mut(phase_index) {
            Some(phase) => {
                phase.status = phase.status.advance();
                Some(phase.status)
            }
            None => {
                warn!(phase_index, "toggle on unknown workflow phase ignored");
                None
            }
        }
    }

    pub fn workflow(&self) -> Vec<WorkflowPhaseView> {
        phase_views(&self.phases)
    }

    // ─── what-if analysis (strict path) ──────────────────────────────────

    /// Runs the standalone analysis. Validation failures leave their
    /// messages on the form and nothing is computed.
    pub fn run_analysis(
        &mut self,
        form: &mut AnalysisForm,
    ) -> Option<TaxAnalysis> {
        let input = match form.validate() {
            Ok(input) => input,
            Err(()) => {
                self.show_message("Please fix validation errors", MessageType::Error);
                return None;
            }
        };

        let calculator = KiddieTaxCalculator::new(self.config.analysis_thresholds());
        match calculator.analyze(input.unearned_income, input.parent_rate) {
            Ok(analysis) => {
                self.show_message("Analysis complete", MessageType::Success);
                Some(analysis)
            }
            Err(e) => {
                form.errors.push(e.to_string());
                self.show_message("Analysis failed", MessageType::Error);
                None
            }
        }
    }

    // ─── render models ───────────────────────────────────────────────────

    pub fn dashboard(&self) -> DashboardSummary {
        let accounts = self.repo.list();
        let savings = self.aggregate_savings(&accounts);
        dashboard_summary(&accounts, self.config.planning_threshold, savings)
    }

    /// Aggregate potential savings under the configured estimate.
    fn aggregate_savings(
        &self,
        accounts: &[Account],
    ) -> Decimal {
        match self.config.savings_estimate {
            SavingsPolicy::Haircut => haircut_savings(
                accounts,
                self.config.planning_threshold,
                self.config.parent_rate,
            ),
            SavingsPolicy::Analyzed => {
                let calculator = KiddieTaxCalculator::new(self.config.analysis_thresholds());
                analyzed_savings(accounts, &calculator, self.config.parent_rate).unwrap_or_else(
                    |e| {
                        warn!("savings estimate unavailable: {e}");
                        Decimal::ZERO
                    },
                )
            }
        }
    }

    pub fn account_rows(&self) -> Vec<AccountRow> {
        account_rows(&self.repo.list(), &self.filter)
    }

    pub fn report(
        &self,
        kind: ReportKind,
    ) -> Vec<ReportTable> {
        let accounts = self.repo.list();
        match kind {
            ReportKind::Threshold => {
                vec![threshold_report(&accounts, self.config.planning_threshold)]
            }
            ReportKind::Gains => vec![gains_report(&accounts)],
            ReportKind::Status => status_report(&accounts),
            ReportKind::Compliance => vec![compliance_report(&accounts)],
        }
    }
}
