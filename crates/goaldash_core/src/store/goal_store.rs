//! Ordered goal collection.
//!
//! # Invariants
//! - Goal names are trimmed, non-blank, and unique. Both `add_goal` and
//!   snapshot decoding reject violations.
//! - Deleting a goal never rewrites project contribution maps.

use crate::model::goal::Goal;
use crate::model::input::{normalize_name, FieldValue, ValidationError};
use crate::store::{check_index, StoreResult};
use serde::{Deserialize, Serialize};

/// Ordered list of goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Goal>", into = "Vec<Goal>")]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw input and appends one goal.
    ///
    /// Returns the position of the new goal.
    ///
    /// # Errors
    /// - Any `Goal::from_input` validation error.
    /// - `DuplicateGoalName` when a goal with the same name exists.
    pub fn add_goal(
        &mut self,
        name: &str,
        target: &FieldValue,
        unit: &str,
    ) -> Result<usize, ValidationError> {
        let goal = Goal::from_input(name, target, unit)?;
        self.push_checked(goal)
    }

    fn push_checked(&mut self, mut goal: Goal) -> Result<usize, ValidationError> {
        goal.name = normalize_name(goal.name.as_str()).ok_or(ValidationError::EmptyGoalName)?;
        goal.unit = goal.unit.trim().to_string();
        if self.find(goal.name.as_str()).is_some() {
            return Err(ValidationError::DuplicateGoalName(goal.name));
        }
        self.goals.push(goal);
        Ok(self.goals.len() - 1)
    }

    /// Removes and returns the goal at `index`.
    pub fn delete_goal(&mut self, index: usize) -> StoreResult<Goal> {
        check_index(index, self.goals.len())?;
        Ok(self.goals.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    /// Looks up one goal by exact name.
    pub fn find(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.name == name)
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.goals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl TryFrom<Vec<Goal>> for GoalStore {
    type Error = ValidationError;

    /// Rebuilds a store from a decoded snapshot under the `add_goal` rules.
    fn try_from(goals: Vec<Goal>) -> Result<Self, Self::Error> {
        let mut store = Self::new();
        for goal in goals {
            store.push_checked(goal)?;
        }
        Ok(store)
    }
}

impl From<GoalStore> for Vec<Goal> {
    fn from(store: GoalStore) -> Self {
        store.goals
    }
}
