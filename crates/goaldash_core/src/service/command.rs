//! Command vocabulary delivered by the transport layer.

use crate::model::input::{FieldValue, SubmittedContributions};
use serde::{Deserialize, Serialize};

/// Per-row control a batch of activation signals belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    DeleteGoal,
    DeleteProject,
    BeginEdit,
}

/// One per-row activation signal as delivered by the UI.
///
/// Accepts click counts, booleans, or `null` (never clicked) on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowSignal {
    Clicks(u32),
    Flag(bool),
    #[default]
    Inactive,
}

impl RowSignal {
    /// Non-zero counts and `true` are active; `0`, `false`, and `null` are not.
    pub fn is_active(self) -> bool {
        match self {
            Self::Clicks(clicks) => clicks != 0,
            Self::Flag(flag) => flag,
            Self::Inactive => false,
        }
    }
}

impl From<u32> for RowSignal {
    fn from(clicks: u32) -> Self {
        Self::Clicks(clicks)
    }
}

impl From<bool> for RowSignal {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// One user action against the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddGoal {
        name: String,
        #[serde(default)]
        target: FieldValue,
        #[serde(default)]
        unit: String,
    },
    DeleteGoal {
        index: usize,
    },
    AddProject {
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        contributions: SubmittedContributions,
    },
    DeleteProject {
        index: usize,
    },
    BeginEdit {
        index: usize,
    },
    CancelEdit,
    SaveEdit {
        index: usize,
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        contributions: SubmittedContributions,
    },
    /// Batch of per-row activation signals in rendering order.
    RowActivation {
        action: RowAction,
        signals: Vec<RowSignal>,
    },
    OpenGoalForm,
    OpenProjectForm,
    CloseForm,
}

impl Command {
    /// Stable event name used in log lines.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::AddGoal { .. } => "goal_add",
            Self::DeleteGoal { .. } => "goal_delete",
            Self::AddProject { .. } => "project_add",
            Self::DeleteProject { .. } => "project_delete",
            Self::BeginEdit { .. } => "edit_begin",
            Self::CancelEdit => "edit_cancel",
            Self::SaveEdit { .. } => "edit_save",
            Self::RowActivation { .. } => "row_activation",
            Self::OpenGoalForm => "form_open_goal",
            Self::OpenProjectForm => "form_open_project",
            Self::CloseForm => "form_close",
        }
    }
}

/// Resolves a signal batch to the single row it acts on.
///
/// The first active signal in rendering order wins; all others in the
/// batch are ignored. `None` means no row was activated.
pub fn first_active_row(signals: &[RowSignal]) -> Option<usize> {
    signals.iter().position(|signal| signal.is_active())
}

/// Turns a signal batch into the positional command it stands for.
pub fn resolve_row_activation(action: RowAction, signals: &[RowSignal]) -> Option<Command> {
    let index = first_active_row(signals)?;
    Some(match action {
        RowAction::DeleteGoal => Command::DeleteGoal { index },
        RowAction::DeleteProject => Command::DeleteProject { index },
        RowAction::BeginEdit => Command::BeginEdit { index },
    })
}
