//! Form descriptors with one numeric field per current goal.

use crate::model::goal::Goal;
use crate::model::pointer::FormPanel;
use crate::model::project::Contributions;
use crate::state::DashboardState;
use serde::Serialize;

/// Unit shown in form labels when a goal has none.
pub const FALLBACK_FORM_UNIT: &str = "%";
/// Shown instead of the project form until a goal exists.
pub const NEEDS_GOAL_MESSAGE: &str = "Add at least one goal first.";

/// Add form shown above the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FormView {
    Goal {
        title: String,
        /// Name, target, and unit inputs in display order.
        inputs: Vec<FormInput>,
    },
    Project {
        title: String,
        /// Name and description inputs in display order.
        inputs: Vec<FormInput>,
        fields: Vec<ProjectFormField>,
    },
    /// Project form requested while no goal exists.
    NeedsGoal {
        message: String,
    },
}

/// Widget a fixed form input renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Number,
    Textarea,
}

/// Fixed input on an add form.
///
/// `key` is the command field the submitted value is sent under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormInput {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

impl FormInput {
    const fn new(
        key: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: InputKind,
    ) -> Self {
        Self {
            key,
            label,
            placeholder,
            kind,
        }
    }
}

fn goal_inputs() -> Vec<FormInput> {
    vec![
        FormInput::new("name", "Goal name", "Name of the goal", InputKind::Text),
        FormInput::new("target", "Target", "Target value", InputKind::Number),
        FormInput::new(
            "unit",
            "Unit",
            "Unit (e.g. %, trees, km, euro)",
            InputKind::Text,
        ),
    ]
}

fn project_inputs() -> Vec<FormInput> {
    vec![
        FormInput::new("name", "Project name", "Name of the project", InputKind::Text),
        FormInput::new(
            "description",
            "Description",
            "Project description (optional)",
            InputKind::Textarea,
        ),
    ]
}

/// Blank contribution input on the add-project form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectFormField {
    pub goal_name: String,
    pub label: String,
    pub placeholder: String,
}

/// Pre-filled contribution input on the inline edit form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionField {
    pub goal_name: String,
    pub label: String,
    pub value: f64,
}

pub(super) fn build_form(state: &DashboardState) -> Option<FormView> {
    match state.form {
        FormPanel::Closed => None,
        FormPanel::Goal => Some(FormView::Goal {
            title: "New goal".to_string(),
            inputs: goal_inputs(),
        }),
        FormPanel::Project if state.goals.is_empty() => Some(FormView::NeedsGoal {
            message: NEEDS_GOAL_MESSAGE.to_string(),
        }),
        FormPanel::Project => Some(FormView::Project {
            title: "New project".to_string(),
            inputs: project_inputs(),
            fields: state
                .goals
                .iter()
                .map(|goal| {
                    let unit = display_unit(goal);
                    ProjectFormField {
                        goal_name: goal.name.clone(),
                        label: format!("Contribution to {} ({unit})", goal.name),
                        placeholder: format!("e.g. 10 ({unit})"),
                    }
                })
                .collect(),
        }),
    }
}

pub(super) fn edit_fields(goals: &[Goal], contributions: &Contributions) -> Vec<ContributionField> {
    goals
        .iter()
        .map(|goal| ContributionField {
            goal_name: goal.name.clone(),
            label: format!("Contribution to {} ({})", goal.name, display_unit(goal)),
            value: contributions.amount_for(goal.name.as_str()),
        })
        .collect()
}

fn display_unit(goal: &Goal) -> &str {
    if goal.unit.is_empty() {
        FALLBACK_FORM_UNIT
    } else {
        goal.unit.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_form, edit_fields, FormView, InputKind, NEEDS_GOAL_MESSAGE};
    use crate::model::input::FieldValue;
    use crate::model::pointer::FormPanel;
    use crate::state::DashboardState;

    #[test]
    fn project_form_needs_a_goal() {
        let state = DashboardState {
            form: FormPanel::Project,
            ..DashboardState::new()
        };
        assert_eq!(
            build_form(&state),
            Some(FormView::NeedsGoal {
                message: NEEDS_GOAL_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn project_form_falls_back_to_percent_unit() {
        let mut state = DashboardState {
            form: FormPanel::Project,
            ..DashboardState::new()
        };
        state
            .goals
            .add_goal("Trees", &FieldValue::from(100.0), "trees")
            .expect("add goal");
        state
            .goals
            .add_goal("Share", &FieldValue::from(50.0), "")
            .expect("add goal");

        let Some(FormView::Project { inputs, fields, .. }) = build_form(&state) else {
            panic!("expected project form");
        };
        let keys: Vec<&str> = inputs.iter().map(|input| input.key).collect();
        assert_eq!(keys, vec!["name", "description"]);
        assert_eq!(inputs[1].kind, InputKind::Textarea);
        assert_eq!(fields[0].label, "Contribution to Trees (trees)");
        assert_eq!(fields[1].label, "Contribution to Share (%)");
        assert_eq!(fields[1].placeholder, "e.g. 10 (%)");

        let edit = edit_fields(state.goals.as_slice(), &Default::default());
        assert_eq!(edit[0].label, fields[0].label);
        assert_eq!(edit[1].label, "Contribution to Share (%)");
        assert_eq!(edit[1].value, 0.0);
    }

    #[test]
    fn goal_form_lists_name_target_and_unit_inputs() {
        let state = DashboardState {
            form: FormPanel::Goal,
            ..DashboardState::new()
        };
        let Some(FormView::Goal { title, inputs }) = build_form(&state) else {
            panic!("expected goal form");
        };
        assert_eq!(title, "New goal");
        let layout: Vec<(&str, InputKind)> =
            inputs.iter().map(|input| (input.key, input.kind)).collect();
        assert_eq!(
            layout,
            vec![
                ("name", InputKind::Text),
                ("target", InputKind::Number),
                ("unit", InputKind::Text),
            ]
        );
        assert!(inputs.iter().all(|input| !input.label.is_empty()));
    }

    #[test]
    fn closed_panel_has_no_form() {
        assert_eq!(build_form(&DashboardState::new()), None);
    }
}
