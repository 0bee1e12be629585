//! Goal domain model.
//!
//! # Invariants
//! - `name` is trimmed and non-blank.
//! - `target` is finite. Positive is expected but not enforced.
//! - Goals are immutable after creation; only deletion changes the store.

use crate::model::input::{normalize_name, FieldValue, ValidationError};
use serde::{Deserialize, Serialize};

/// A named numeric target tracked by one gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Lookup key for project contributions.
    pub name: String,
    /// Amount that marks the goal as complete.
    pub target: f64,
    /// Display unit. May be empty.
    #[serde(default)]
    pub unit: String,
}

impl Goal {
    /// Builds a goal from raw form input.
    ///
    /// # Errors
    /// - `EmptyGoalName` when `name` is blank.
    /// - `MissingTarget` when `target` is blank.
    /// - `NonNumericTarget` when `target` does not parse as a finite number.
    pub fn from_input(
        name: &str,
        target: &FieldValue,
        unit: &str,
    ) -> Result<Self, ValidationError> {
        let name = normalize_name(name).ok_or(ValidationError::EmptyGoalName)?;
        if target.is_blank() {
            return Err(ValidationError::MissingTarget);
        }
        let target = target
            .as_amount()
            .ok_or_else(|| ValidationError::NonNumericTarget(describe_field(target)))?;
        Ok(Self {
            name,
            target,
            unit: unit.trim().to_string(),
        })
    }

    /// Title text used by gauges: `name (unit)` or just `name`.
    pub fn label(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.unit)
        }
    }
}

fn describe_field(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(number) => number.to_string(),
        FieldValue::Text(raw) => raw.trim().to_string(),
        FieldValue::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::Goal;
    use crate::model::input::{FieldValue, ValidationError};

    #[test]
    fn from_input_trims_fields() {
        let goal =
            Goal::from_input(" Trees ", &FieldValue::from("100"), " trees ").expect("valid goal");
        assert_eq!(goal.name, "Trees");
        assert_eq!(goal.target, 100.0);
        assert_eq!(goal.unit, "trees");
    }

    #[test]
    fn from_input_reports_each_validation_failure() {
        assert_eq!(
            Goal::from_input("", &FieldValue::from(1.0), "").expect_err("blank name"),
            ValidationError::EmptyGoalName
        );
        assert_eq!(
            Goal::from_input("Trees", &FieldValue::Empty, "").expect_err("missing target"),
            ValidationError::MissingTarget
        );
        assert_eq!(
            Goal::from_input("Trees", &FieldValue::from("lots"), "").expect_err("text target"),
            ValidationError::NonNumericTarget("lots".to_string())
        );
    }

    #[test]
    fn label_omits_empty_unit() {
        let with_unit =
            Goal::from_input("Trees", &FieldValue::from(10.0), "trees").expect("goal with unit");
        let without_unit =
            Goal::from_input("Budget", &FieldValue::from(10.0), "").expect("goal without unit");
        assert_eq!(with_unit.label(), "Trees (trees)");
        assert_eq!(without_unit.label(), "Budget");
    }
}
