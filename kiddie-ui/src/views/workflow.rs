use std::fmt;

use kiddie_core::models::{PhaseStatus, WorkflowPhase};

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Medium,
    Negative,
}

impl StatusTone {
    fn for_status(status: PhaseStatus) -> Self {
        match status {
            PhaseStatus::Completed => Self::Positive,
            PhaseStatus::InProgress => Self::Medium,
            PhaseStatus::NotStarted => Self::Negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub label: String,
    /// Tasks render checked only once the whole phase is completed.
    pub checked: bool,
}

/// One workflow phase, formatted for the tracker view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowPhaseView {
    pub title: String,
    pub status_label: String,
    pub tone: StatusTone,
    pub target_date: String,
    pub responsible: String,
    pub tasks: Vec<TaskView>,
}

impl fmt::Display for WorkflowPhaseView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.status_label)?;
        writeln!(
            f,
            "  Target: {} | Responsible: {}",
            self.target_date, self.responsible
        )?;
        for task in &self.tasks {
            let mark = if task.checked { "x" } else { " " };
            writeln!(f, "  [{mark}] {}", task.label)?;
        }
        Ok(())
    }
}

pub fn phase_views(phases: &[WorkflowPhase]) -> Vec<WorkflowPhaseView> {
    phases
        .iter()
        .map(|phase| {
            let completed = phase.status == PhaseStatus::Completed;
            WorkflowPhaseView {
                title: phase.name.clone(),
                status_label: phase.status.as_str().to_string(),
                tone: StatusTone::for_status(phase.status),
                target_date: phase.target_date.clone(),
                responsible: phase.responsible.clone(),
                tasks: phase
                    .tasks
                    .iter()
                    .map(|t| TaskView {
                        label: t.clone(),
                        checked: completed,
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use kiddie_core::models::seed_phases;

    #[test]
    fn fresh_phases_render_negative_and_unchecked() {
        let views = phase_views(&seed_phases());

        assert_eq!(views.len(), 7);
        assert_eq!(views[0].status_label, "Not Started");
        assert_eq!(views[0].tone, StatusTone::Negative);
        assert!(views[0].tasks.iter().all(|t| !t.checked));
    }

    #[test]
    fn completed_phase_checks_every_task() {
        let mut phases = seed_phases();
        phases[1].status = PhaseStatus::Completed;

        let views = phase_views(&phases);

        assert_eq!(views[1].tone, StatusTone::Positive);
        assert!(views[1].tasks.iter().all(|t| t.checked));
        // Other phases are untouched.
        assert!(views[0].tasks.iter().all(|t| !t.checked));
    }

    #[test]
    fn in_progress_phase_is_medium_but_unchecked() {
        let mut phases = seed_phases();
        phases[2].status = PhaseStatus::InProgress;

        let views = phase_views(&phases);

        assert_eq!(views[2].tone, StatusTone::Medium);
        assert!(views[2].tasks.iter().all(|t| !t.checked));
    }
}
