//! Transient UI pointers: the edit selection and the open form panel.

use serde::{Deserialize, Serialize};

/// Position of the project currently open for editing, if any.
///
/// # Invariants
/// - When set, the index references a live project.
/// - At most one project is in edit mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditPointer(Option<usize>);

impl EditPointer {
    /// Pointer with no selection.
    pub fn none() -> Self {
        Self(None)
    }

    /// Pointer selecting `index`.
    pub fn at(index: usize) -> Self {
        Self(Some(index))
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    pub fn is_editing(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn set(&mut self, index: usize) {
        self.0 = Some(index);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Keeps the pointer on the same project after `removed` is deleted.
    ///
    /// Clears when the edited project itself was removed and shifts down
    /// when an earlier project was removed.
    pub fn on_project_removed(&mut self, removed: usize) {
        self.0 = match self.0 {
            Some(current) if current == removed => None,
            Some(current) if current > removed => Some(current - 1),
            other => other,
        };
    }
}

/// Which add form is open above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPanel {
    /// No form shown.
    #[default]
    Closed,
    /// New goal form.
    Goal,
    /// New project form.
    Project,
}
