//! Mutation engine: applies one command to dashboard state.
//!
//! # Responsibility
//! - Validate input before committing any store write.
//! - Keep the edit pointer and form panel consistent with the stores.
//! - Report every command as committed, rejected, or ignored.
//!
//! # Invariants
//! - Rejected and ignored commands leave state unchanged, except that
//!   `SaveEdit` always clears the edit pointer.
//! - One row-activation batch acts on at most one row.
//! - No command is fatal; the returned state is always renderable.

use crate::model::input::{FieldValue, SubmittedContributions, ValidationError};
use crate::model::pointer::FormPanel;
use crate::service::command::{resolve_row_activation, Command, RowAction, RowSignal};
use crate::state::DashboardState;
use crate::store::project_store::NameUpdate;
use crate::store::IndexError;
use crate::view::{build_view, DashboardView};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that make the engine reject a command.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Input failed validation.
    Validation(ValidationError),
    /// Command referenced a stale or invalid position.
    Index(IndexError),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Index(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Index(err) => Some(err),
        }
    }
}

impl From<ValidationError> for DashboardError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<IndexError> for DashboardError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

/// What the engine did with one command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// State changed as requested.
    Committed,
    /// Command was not committed.
    Rejected(DashboardError),
    /// Nothing to do, e.g. a row batch with no active signal.
    Ignored,
}

impl CommandOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }

    fn status(&self) -> &'static str {
        match self {
            Self::Committed => "ok",
            Self::Rejected(_) => "rejected",
            Self::Ignored => "ignored",
        }
    }
}

/// Updated state plus the outcome of the command that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    pub state: DashboardState,
    pub outcome: CommandOutcome,
}

/// Applies `command` to `state` and returns the updated state.
pub fn apply(state: DashboardState, command: Command) -> CommandReport {
    let mut service = DashboardService::with_state(state);
    let outcome = service.execute(command);
    CommandReport {
        state: service.into_state(),
        outcome,
    }
}

type CommandResult = Result<CommandOutcome, DashboardError>;

/// Single-writer owner of dashboard state.
#[derive(Debug, Default)]
pub struct DashboardService {
    state: DashboardState,
}

impl DashboardService {
    /// Creates a service over the empty startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing snapshot.
    pub fn with_state(mut state: DashboardState) -> Self {
        if state.sanitize_edit_pointer() {
            debug!("event=edit_pointer_sanitized module=mutation status=ok");
        }
        Self { state }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn into_state(self) -> DashboardState {
        self.state
    }

    /// Builds the render-ready view of the current state.
    pub fn view(&self) -> DashboardView {
        build_view(&self.state)
    }

    /// Applies one command as an atomic step.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        let event = command.event_name();
        let outcome = match self.dispatch(command) {
            Ok(outcome) => outcome,
            Err(err) => CommandOutcome::Rejected(err),
        };
        info!(
            "event={} module=mutation status={} goals={} projects={} editing={}",
            event,
            outcome.status(),
            self.state.goals.len(),
            self.state.projects.len(),
            self.state.edit_pointer.get().is_some()
        );
        outcome
    }

    fn dispatch(&mut self, command: Command) -> CommandResult {
        match command {
            Command::AddGoal { name, target, unit } => self.add_goal(&name, &target, &unit),
            Command::DeleteGoal { index } => self.delete_goal(index),
            Command::AddProject {
                name,
                description,
                contributions,
            } => self.add_project(&name, &description, &contributions),
            Command::DeleteProject { index } => self.delete_project(index),
            Command::BeginEdit { index } => self.begin_edit(index),
            Command::CancelEdit => self.cancel_edit(),
            Command::SaveEdit {
                index,
                name,
                description,
                contributions,
            } => self.save_edit(index, &name, &description, &contributions),
            Command::RowActivation { action, signals } => self.row_activation(action, &signals),
            Command::OpenGoalForm => self.set_form(FormPanel::Goal),
            Command::OpenProjectForm => self.set_form(FormPanel::Project),
            Command::CloseForm => self.set_form(FormPanel::Closed),
        }
    }

    fn add_goal(&mut self, name: &str, target: &FieldValue, unit: &str) -> CommandResult {
        self.state.goals.add_goal(name, target, unit)?;
        self.state.form = FormPanel::Closed;
        Ok(CommandOutcome::Committed)
    }

    fn delete_goal(&mut self, index: usize) -> CommandResult {
        // Project contribution maps keep the orphaned key.
        self.state.goals.delete_goal(index)?;
        Ok(CommandOutcome::Committed)
    }

    fn add_project(
        &mut self,
        name: &str,
        description: &str,
        submitted: &SubmittedContributions,
    ) -> CommandResult {
        let DashboardState {
            goals, projects, ..
        } = &mut self.state;
        projects.add_project(name, description, goals.as_slice(), submitted)?;
        self.state.form = FormPanel::Closed;
        Ok(CommandOutcome::Committed)
    }

    fn delete_project(&mut self, index: usize) -> CommandResult {
        self.state.projects.delete_project(index)?;
        self.state.edit_pointer.on_project_removed(index);
        Ok(CommandOutcome::Committed)
    }

    fn begin_edit(&mut self, index: usize) -> CommandResult {
        if self.state.projects.get(index).is_none() {
            return Err(IndexError {
                index,
                len: self.state.projects.len(),
            }
            .into());
        }
        self.state.edit_pointer.set(index);
        Ok(CommandOutcome::Committed)
    }

    fn cancel_edit(&mut self) -> CommandResult {
        self.state.edit_pointer.clear();
        Ok(CommandOutcome::Committed)
    }

    fn save_edit(
        &mut self,
        index: usize,
        name: &str,
        description: &str,
        submitted: &SubmittedContributions,
    ) -> CommandResult {
        self.state.edit_pointer.clear();
        let DashboardState {
            goals, projects, ..
        } = &mut self.state;
        let name_update =
            projects.update_project(index, name, description, goals.as_slice(), submitted)?;
        if name_update == NameUpdate::Retained {
            debug!("event=edit_save module=mutation status=ok name=retained");
        }
        Ok(CommandOutcome::Committed)
    }

    fn row_activation(&mut self, action: RowAction, signals: &[RowSignal]) -> CommandResult {
        match resolve_row_activation(action, signals) {
            Some(command) => self.dispatch(command),
            None => Ok(CommandOutcome::Ignored),
        }
    }

    fn set_form(&mut self, form: FormPanel) -> CommandResult {
        self.state.form = form;
        Ok(CommandOutcome::Committed)
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, CommandOutcome, DashboardError, DashboardService};
    use crate::model::input::{FieldValue, SubmittedContributions, ValidationError};
    use crate::model::pointer::{EditPointer, FormPanel};
    use crate::service::command::{Command, RowAction, RowSignal};
    use crate::state::DashboardState;
    use crate::store::IndexError;

    fn add_goal(name: &str, target: f64) -> Command {
        Command::AddGoal {
            name: name.to_string(),
            target: FieldValue::from(target),
            unit: String::new(),
        }
    }

    fn add_project(name: &str) -> Command {
        Command::AddProject {
            name: name.to_string(),
            description: String::new(),
            contributions: SubmittedContributions::new(),
        }
    }

    fn service_with_projects(names: &[&str]) -> DashboardService {
        let mut service = DashboardService::new();
        for name in names {
            assert!(service.execute(add_project(name)).is_committed());
        }
        service
    }

    #[test]
    fn rejected_add_goal_returns_state_unchanged() {
        let before = apply(DashboardState::new(), add_goal("Trees", 100.0)).state;
        let report = apply(
            before.clone(),
            Command::AddGoal {
                name: "Bikes".to_string(),
                target: FieldValue::Empty,
                unit: String::new(),
            },
        );
        assert_eq!(
            report.outcome,
            CommandOutcome::Rejected(DashboardError::Validation(ValidationError::MissingTarget))
        );
        assert_eq!(report.state, before);
    }

    #[test]
    fn delete_earlier_project_shifts_edit_pointer() {
        let mut service = service_with_projects(&["A", "B", "C"]);
        service.execute(Command::BeginEdit { index: 2 });
        service.execute(Command::DeleteProject { index: 0 });
        assert_eq!(service.state().edit_pointer, EditPointer::at(1));
        assert_eq!(service.state().projects.get(1).expect("shifted project").name, "C");
    }

    #[test]
    fn begin_edit_out_of_range_keeps_pointer() {
        let mut service = service_with_projects(&["A"]);
        service.execute(Command::BeginEdit { index: 0 });
        let outcome = service.execute(Command::BeginEdit { index: 5 });
        assert_eq!(
            outcome,
            CommandOutcome::Rejected(DashboardError::Index(IndexError { index: 5, len: 1 }))
        );
        assert_eq!(service.state().edit_pointer, EditPointer::at(0));
    }

    #[test]
    fn begin_edit_moves_selection_to_new_row() {
        let mut service = service_with_projects(&["A", "B"]);
        service.execute(Command::BeginEdit { index: 0 });
        service.execute(Command::BeginEdit { index: 1 });
        assert_eq!(service.state().edit_pointer, EditPointer::at(1));
    }

    #[test]
    fn save_edit_out_of_range_still_clears_pointer() {
        let mut service = service_with_projects(&["A"]);
        service.execute(Command::BeginEdit { index: 0 });
        let outcome = service.execute(Command::SaveEdit {
            index: 4,
            name: "X".to_string(),
            description: String::new(),
            contributions: SubmittedContributions::new(),
        });
        assert!(matches!(outcome, CommandOutcome::Rejected(DashboardError::Index(_))));
        assert!(service.state().edit_pointer.is_none());
        assert_eq!(service.state().projects.get(0).expect("untouched project").name, "A");
    }

    #[test]
    fn row_batch_without_active_signal_is_ignored() {
        let mut service = service_with_projects(&["A", "B"]);
        let before = service.state().clone();
        let outcome = service.execute(Command::RowActivation {
            action: RowAction::DeleteProject,
            signals: vec![RowSignal::Clicks(0), RowSignal::Inactive],
        });
        assert_eq!(outcome, CommandOutcome::Ignored);
        assert_eq!(service.state(), &before);
    }

    #[test]
    fn row_batch_acts_on_first_active_row_only() {
        let mut service = service_with_projects(&["A", "B", "C"]);
        let outcome = service.execute(Command::RowActivation {
            action: RowAction::DeleteProject,
            signals: vec![RowSignal::Clicks(0), RowSignal::Clicks(1), RowSignal::Flag(true)],
        });
        assert!(outcome.is_committed());
        let names: Vec<&str> = service
            .state()
            .projects
            .iter()
            .map(|project| project.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn committed_adds_close_form_and_rejected_adds_keep_it_open() {
        let mut service = DashboardService::new();
        service.execute(Command::OpenGoalForm);
        service.execute(add_goal("", 1.0));
        assert_eq!(service.state().form, FormPanel::Goal);
        service.execute(add_goal("Trees", 1.0));
        assert_eq!(service.state().form, FormPanel::Closed);

        service.execute(Command::OpenProjectForm);
        service.execute(add_project(" "));
        assert_eq!(service.state().form, FormPanel::Project);
        service.execute(add_project("Park"));
        assert_eq!(service.state().form, FormPanel::Closed);
    }

    #[test]
    fn with_state_sanitizes_dangling_pointer() {
        let state = DashboardState {
            edit_pointer: EditPointer::at(3),
            ..DashboardState::new()
        };
        let service = DashboardService::with_state(state);
        assert!(service.state().edit_pointer.is_none());
    }
}
