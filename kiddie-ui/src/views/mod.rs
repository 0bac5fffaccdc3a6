//! Pure render models.
//!
//! Each view is a structured record built from domain data alone, with no
//! markup generation. The presentation host (terminal, web front end) owns
//! the actual rendering; everything here is testable without a DOM.

mod accounts;
mod dashboard;
mod reports;
mod workflow;

pub use accounts::{AccountFilter, AccountRow, CurrencyCell, account_rows};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use reports::{
    ReportTable, compliance_report, gains_report, status_report, threshold_report,
};
pub use workflow::{StatusTone, TaskView, WorkflowPhaseView, phase_views};
