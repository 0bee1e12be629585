//! Pure aggregation of project contributions into goal progress.
//!
//! # Invariants
//! - Totals are looked up by current goal name; orphaned keys are ignored.
//! - Completion is recomputed from data on every call, never cached.

use crate::model::goal::Goal;
use crate::model::project::Project;
use serde::{Deserialize, Serialize};

/// Two-valued gauge completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeState {
    /// Total has reached the target.
    Complete,
    /// Total is still below the target.
    InProgress,
}

impl GaugeState {
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Derived progress figures for one goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub total: f64,
    pub target: f64,
    /// Upper bound of the gauge axis: `max(target, total)`.
    pub axis_max: f64,
    pub state: GaugeState,
}

/// Sums every project's contribution to `goal`, treating absence as zero.
pub fn total_contribution(goal: &Goal, projects: &[Project]) -> f64 {
    projects
        .iter()
        .map(|project| project.contributions.amount_for(goal.name.as_str()))
        .sum()
}

/// Returns `total / target`, or `None` when the target is not positive.
pub fn achieved_fraction(goal: &Goal, total: f64) -> Option<f64> {
    if goal.target > 0.0 {
        Some(total / goal.target)
    } else {
        None
    }
}

/// Classifies a total against its target.
pub fn gauge_state(total: f64, target: f64) -> GaugeState {
    if total >= target {
        GaugeState::Complete
    } else {
        GaugeState::InProgress
    }
}

/// Computes all derived figures for one goal.
pub fn goal_progress(goal: &Goal, projects: &[Project]) -> GoalProgress {
    let total = total_contribution(goal, projects);
    GoalProgress {
        total,
        target: goal.target,
        axis_max: goal.target.max(total),
        state: gauge_state(total, goal.target),
    }
}
