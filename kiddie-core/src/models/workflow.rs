use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Next status in the review cycle. Completed wraps back to NotStarted
    /// so a phase can be reopened.
    pub fn advance(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }
}

/// One phase of the annual kiddie-tax review workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowPhase {
    pub name: String,
    pub tasks: Vec<String>,
    pub target_date: String,
    pub responsible: String,
    pub status: PhaseStatus,
}

impl WorkflowPhase {
    fn new(
        name: &str,
        tasks: &[&str],
        target_date: &str,
        responsible: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
            target_date: target_date.to_string(),
            responsible: responsible.to_string(),
            status: PhaseStatus::NotStarted,
        }
    }
}

/// The seven phases of the annual review, all starting as NotStarted.
pub fn seed_phases() -> Vec<WorkflowPhase> {
    vec![
        WorkflowPhase::new(
            "Phase 1: Account Identification",
            &[
                "Generate list of all UTMA/UGMA accounts across custodians",
                "Verify account owner (minor) and custodian information",
                "Confirm advisor assignments",
                "Update minor ages and verify kiddie tax applicability",
            ],
            "January 31",
            "Operations Team",
        ),
        WorkflowPhase::new(
            "Phase 2: YTD Activity Review",
            &[
                "Pull YTD realized gains/losses for each account",
                "Calculate YTD unrealized gains/losses by position",
                "Identify high embedded gains/losses positions",
                "Review YTD income distributions and projections",
            ],
            "February 15",
            "Portfolio Manager",
        ),
        WorkflowPhase::new(
            "Phase 3: Capital Gains Distribution Review",
            &[
                "Check custodian Q4 capital gains distribution notices",
                "Flag accounts with mutual funds projecting large payouts",
                "Update expected distribution amounts in tracking system",
            ],
            "November 30",
            "Operations Team",
        ),
        WorkflowPhase::new(
            "Phase 4: Tax Analysis",
            &[
                "Calculate current unearned income vs 2025 thresholds",
                "Determine available tax budget ($2,700 - current income)",
                "Identify gain harvesting vs loss harvesting opportunities",
                "Assess parent tax bracket impact for excess income",
            ],
            "December 1",
            "Tax Specialist",
        ),
        WorkflowPhase::new(
            "Phase 5: Advisor Coordination",
            &[
                "Prepare summary for advisor showing tax liability",
                "Present realization opportunities and suggested trades",
                "Obtain advisor approval for recommended strategies",
            ],
            "December 15",
            "Advisor",
        ),
        WorkflowPhase::new(
            "Phase 6: Implementation",
            &[
                "Execute approved tax trades (gain/loss harvesting)",
                "Confirm trade execution and settlement",
                "Log all transactions in CRM and custodian records",
            ],
            "December 20",
            "Trading Team",
        ),
        WorkflowPhase::new(
            "Phase 7: Documentation",
            &[
                "Record review date and strategy in CRM (Wealthbox)",
                "Save analysis and supporting docs in client Google Drive folder",
                "Update compliance log and task tracker for audit trail",
            ],
            "December 31",
            "Compliance",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn advance_cycles_through_all_statuses() {
        let status = PhaseStatus::NotStarted;

        let status = status.advance();
        assert_eq!(status, PhaseStatus::InProgress);

        let status = status.advance();
        assert_eq!(status, PhaseStatus::Completed);

        let status = status.advance();
        assert_eq!(status, PhaseStatus::NotStarted);
    }

    #[test]
    fn seed_phases_are_seven_and_not_started() {
        let phases = seed_phases();

        assert_eq!(phases.len(), 7);
        assert!(phases.iter().all(|p| p.status == PhaseStatus::NotStarted));
    }

    #[test]
    fn seed_phase_four_owns_the_tax_analysis() {
        let phases = seed_phases();

        assert_eq!(phases[3].name, "Phase 4: Tax Analysis");
        assert_eq!(phases[3].responsible, "Tax Specialist");
        assert_eq!(phases[3].tasks.len(), 4);
    }
}
