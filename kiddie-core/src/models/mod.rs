mod account;
mod thresholds;
mod workflow;

pub use account::{Account, AccountStatus, NewAccount, Priority, TaxStrategy};
pub use thresholds::{TaxThresholds, planning_threshold_2025};
pub use workflow::{PhaseStatus, WorkflowPhase, seed_phases};
