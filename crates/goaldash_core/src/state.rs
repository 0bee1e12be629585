//! Process-owned dashboard state passed into and out of every command.
//!
//! # Invariants
//! - A fresh state is empty with no edit selection and no open form.
//! - `edit_pointer`, when set, is within `projects` bounds.
//! - A decoded snapshot holds the same name invariants as one built through
//!   commands; the stores reject blank or duplicate goal names and blank
//!   project names while deserializing.

use crate::model::pointer::{EditPointer, FormPanel};
use crate::store::goal_store::GoalStore;
use crate::store::project_store::ProjectStore;
use serde::{Deserialize, Serialize};

/// Goals, projects, and transient UI pointers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub goals: GoalStore,
    pub projects: ProjectStore,
    pub edit_pointer: EditPointer,
    pub form: FormPanel,
}

impl DashboardState {
    /// Creates the empty startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears an edit pointer that no longer references a live project.
    ///
    /// Used when state arrives from outside the core (for example as JSON).
    /// Returns whether the pointer was cleared.
    pub fn sanitize_edit_pointer(&mut self) -> bool {
        match self.edit_pointer.get() {
            Some(index) if index >= self.projects.len() => {
                self.edit_pointer.clear();
                true
            }
            _ => false,
        }
    }
}
