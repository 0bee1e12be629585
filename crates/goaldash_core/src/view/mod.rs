//! Render-ready view model built from one state snapshot.
//!
//! # Responsibility
//! - Describe gauges, project rows, and the open form for a rendering layer.
//! - Emit dynamic per-goal form fields as ordered lists.
//!
//! # Invariants
//! - Building a view never mutates state.
//! - Empty-state messages replace normal output; they never augment it.
//! - Without goals the whole board is replaced, projects included.

use crate::service::aggregate::goal_progress;
use crate::state::DashboardState;
use serde::Serialize;
use std::collections::HashMap;

mod forms;

pub use forms::{
    ContributionField, FormInput, FormView, InputKind, ProjectFormField, FALLBACK_FORM_UNIT,
    NEEDS_GOAL_MESSAGE,
};

/// Shown instead of the board when no goals exist.
pub const NO_GOALS_MESSAGE: &str = "No goals yet. Start by adding a goal.";
/// Shown instead of the project list when no projects exist.
pub const NO_PROJECTS_MESSAGE: &str = "No projects yet.";
/// Placeholder for a project without description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// Complete view for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub content: BoardContent,
    /// Add form shown above the board, if any.
    pub form: Option<FormView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardContent {
    NoGoals {
        message: String,
    },
    Board {
        gauges: Vec<GaugeView>,
        projects: ProjectList,
    },
}

/// One gauge per goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    /// Goal position, used by per-row delete controls.
    pub index: usize,
    pub label: String,
    pub total: f64,
    pub target: f64,
    pub unit: String,
    pub axis_max: f64,
    pub complete: bool,
    /// Text rendered after the value, e.g. `/ 100 trees`.
    pub value_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectList {
    Empty { message: String },
    Entries { entries: Vec<ProjectEntry> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProjectEntry {
    Detail(ProjectDetailView),
    Editing(ProjectEditForm),
}

/// Read-only project row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub index: usize,
    pub name: String,
    /// Description, or a placeholder when empty.
    pub description: String,
    pub contributions: Vec<ContributionLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionLine {
    pub goal_name: String,
    pub value: f64,
    /// Unit of the current goal with this name; empty for deleted goals.
    pub unit: String,
    pub label: String,
}

/// Inline edit form for the project selected by the edit pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEditForm {
    pub index: usize,
    pub heading: String,
    pub name: String,
    pub description: String,
    /// One field per current goal, in goal order.
    pub fields: Vec<ContributionField>,
}

impl ProjectEntry {
    pub fn index(&self) -> usize {
        match self {
            Self::Detail(detail) => detail.index,
            Self::Editing(form) => form.index,
        }
    }
}

/// Builds the view for the current state.
pub fn build_view(state: &DashboardState) -> DashboardView {
    DashboardView {
        content: build_content(state),
        form: forms::build_form(state),
    }
}

fn build_content(state: &DashboardState) -> BoardContent {
    if state.goals.is_empty() {
        return BoardContent::NoGoals {
            message: NO_GOALS_MESSAGE.to_string(),
        };
    }

    let projects = state.projects.as_slice();
    let gauges = state
        .goals
        .iter()
        .enumerate()
        .map(|(index, goal)| {
            let progress = goal_progress(goal, projects);
            GaugeView {
                index,
                label: goal.label(),
                total: progress.total,
                target: progress.target,
                unit: goal.unit.clone(),
                axis_max: progress.axis_max,
                complete: progress.state.is_complete(),
                value_suffix: format!("/ {} {}", goal.target, goal.unit)
                    .trim_end()
                    .to_string(),
            }
        })
        .collect();

    BoardContent::Board {
        gauges,
        projects: build_project_list(state),
    }
}

fn build_project_list(state: &DashboardState) -> ProjectList {
    if state.projects.is_empty() {
        return ProjectList::Empty {
            message: NO_PROJECTS_MESSAGE.to_string(),
        };
    }

    let units: HashMap<&str, &str> = state
        .goals
        .iter()
        .map(|goal| (goal.name.as_str(), goal.unit.as_str()))
        .collect();

    let entries = state
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            if state.edit_pointer.is_editing(index) {
                ProjectEntry::Editing(ProjectEditForm {
                    index,
                    heading: format!("Edit project: {}", project.name),
                    name: project.name.clone(),
                    description: project.description.clone(),
                    fields: forms::edit_fields(state.goals.as_slice(), &project.contributions),
                })
            } else {
                let contributions = project
                    .contributions
                    .iter()
                    .map(|entry| {
                        let unit = units.get(entry.goal_name.as_str()).copied().unwrap_or("");
                        ContributionLine {
                            goal_name: entry.goal_name.clone(),
                            value: entry.amount,
                            unit: unit.to_string(),
                            label: format!("{}: {} {}", entry.goal_name, entry.amount, unit)
                                .trim_end()
                                .to_string(),
                        }
                    })
                    .collect();
                let description = if project.description.trim().is_empty() {
                    NO_DESCRIPTION_PLACEHOLDER.to_string()
                } else {
                    project.description.clone()
                };
                ProjectEntry::Detail(ProjectDetailView {
                    index,
                    name: project.name.clone(),
                    description,
                    contributions,
                })
            }
        })
        .collect();

    ProjectList::Entries { entries }
}
