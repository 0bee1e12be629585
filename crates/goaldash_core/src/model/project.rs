//! Project domain model and its per-goal contribution map.
//!
//! # Invariants
//! - `name` is trimmed and non-blank.
//! - `contributions` holds one entry per goal known at write time, in goal
//!   order. Later goals are absent and read as zero.
//! - Orphaned entries (for deleted goals) are kept as-is.

use crate::model::goal::Goal;
use crate::model::input::{normalize_name, SubmittedContributions, ValidationError};
use serde::{Deserialize, Serialize};

/// One `goal name -> amount` entry owned by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub goal_name: String,
    pub amount: f64,
}

/// Ordered contribution map keyed by goal name.
///
/// Decoding collapses repeated keys; the last amount wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Contribution>", into = "Vec<Contribution>")]
pub struct Contributions {
    entries: Vec<Contribution>,
}

impl Contributions {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips current goals with submitted values.
    ///
    /// Every goal gets an entry; blank or unparsable values become 0.
    /// Submitted keys that match no goal are dropped.
    pub fn from_submission<'a>(
        goals: impl IntoIterator<Item = &'a Goal>,
        submitted: &SubmittedContributions,
    ) -> Self {
        let entries = goals
            .into_iter()
            .map(|goal| Contribution {
                goal_name: goal.name.clone(),
                amount: submitted
                    .get(goal.name.as_str())
                    .and_then(|value| value.as_amount())
                    .unwrap_or(0.0),
            })
            .collect();
        Self { entries }
    }

    /// Sets one entry, replacing an existing amount in place.
    pub fn insert(&mut self, goal_name: impl Into<String>, amount: f64) {
        let goal_name = goal_name.into();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.goal_name == goal_name)
        {
            Some(entry) => entry.amount = amount,
            None => self.entries.push(Contribution { goal_name, amount }),
        }
    }

    /// Returns the stored amount for one goal, if present.
    pub fn get(&self, goal_name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.goal_name == goal_name)
            .map(|entry| entry.amount)
    }

    /// Returns the amount for one goal, treating absence as zero.
    pub fn amount_for(&self, goal_name: &str) -> f64 {
        self.get(goal_name).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contribution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Contributions {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut contributions = Self::new();
        for (goal_name, amount) in iter {
            contributions.insert(goal_name, amount);
        }
        contributions
    }
}

impl From<Vec<Contribution>> for Contributions {
    fn from(entries: Vec<Contribution>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.goal_name, entry.amount))
            .collect()
    }
}

impl From<Contributions> for Vec<Contribution> {
    fn from(contributions: Contributions) -> Self {
        contributions.entries
    }
}

/// A named initiative contributing amounts toward goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contributions: Contributions,
}

impl Project {
    /// Builds a project from raw form input against the current goals.
    ///
    /// # Errors
    /// - `EmptyProjectName` when `name` is blank.
    pub fn from_input(
        name: &str,
        description: &str,
        goals: &[Goal],
        submitted: &SubmittedContributions,
    ) -> Result<Self, ValidationError> {
        let name = normalize_name(name).ok_or(ValidationError::EmptyProjectName)?;
        Ok(Self {
            name,
            description: description.to_string(),
            contributions: Contributions::from_submission(goals, submitted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Contributions, Project};
    use crate::model::goal::Goal;
    use crate::model::input::{FieldValue, SubmittedContributions, ValidationError};

    fn goal(name: &str) -> Goal {
        Goal {
            name: name.to_string(),
            target: 10.0,
            unit: String::new(),
        }
    }

    #[test]
    fn from_submission_covers_every_goal_in_order() {
        let goals = vec![goal("Trees"), goal("Bikes"), goal("Solar")];
        let mut submitted = SubmittedContributions::new();
        submitted.insert("Solar".to_string(), FieldValue::from("3"));
        submitted.insert("Trees".to_string(), FieldValue::from(5.0));
        submitted.insert("Bikes".to_string(), FieldValue::from("a few"));
        submitted.insert("Unknown".to_string(), FieldValue::from(9.0));

        let contributions = Contributions::from_submission(&goals, &submitted);
        let names: Vec<&str> = contributions
            .iter()
            .map(|entry| entry.goal_name.as_str())
            .collect();
        assert_eq!(names, vec!["Trees", "Bikes", "Solar"]);
        assert_eq!(contributions.get("Trees"), Some(5.0));
        assert_eq!(contributions.get("Bikes"), Some(0.0));
        assert_eq!(contributions.get("Solar"), Some(3.0));
        assert_eq!(contributions.get("Unknown"), None);
    }

    #[test]
    fn amount_for_defaults_missing_goal_to_zero() {
        let contributions: Contributions = [("Trees", 40.0)].into_iter().collect();
        assert_eq!(contributions.amount_for("Trees"), 40.0);
        assert_eq!(contributions.amount_for("Bikes"), 0.0);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut contributions = Contributions::new();
        contributions.insert("Trees", 1.0);
        contributions.insert("Trees", 2.0);
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions.get("Trees"), Some(2.0));
    }

    #[test]
    fn project_from_input_rejects_blank_name() {
        let err = Project::from_input("  ", "", &[], &SubmittedContributions::new())
            .expect_err("blank name should be rejected");
        assert_eq!(err, ValidationError::EmptyProjectName);
    }

    #[test]
    fn contributions_serialize_as_ordered_list() {
        let contributions: Contributions = [("Trees", 40.0)].into_iter().collect();
        let json = serde_json::to_value(&contributions).expect("serialize contributions");
        assert_eq!(json[0]["goal_name"], "Trees");
        assert_eq!(json[0]["amount"], 40.0);
    }

    #[test]
    fn decoding_collapses_repeated_keys() {
        let contributions: Contributions = serde_json::from_value(serde_json::json!([
            { "goal_name": "Trees", "amount": 5.0 },
            { "goal_name": "Trees", "amount": 7.0 }
        ]))
        .expect("contribution list should decode");
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions.get("Trees"), Some(7.0));
    }
}
