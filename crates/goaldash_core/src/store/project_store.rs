//! Ordered project collection.
//!
//! # Invariants
//! - Contribution maps are replaced wholesale on update, never merged.
//! - An update with a blank name keeps the previous name.
//! - Decoded snapshots must carry trimmed, non-blank project names.

use crate::model::goal::Goal;
use crate::model::input::{normalize_name, SubmittedContributions, ValidationError};
use crate::model::project::{Contributions, Project};
use crate::store::{check_index, StoreResult};
use serde::{Deserialize, Serialize};

/// How `update_project` treated the submitted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameUpdate {
    /// Submitted name was stored.
    Replaced,
    /// Submitted name was blank; prior name kept.
    Retained,
}

/// Ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Project>", into = "Vec<Project>")]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw input and appends one project.
    ///
    /// `goals` is the current goal list; contributions get one entry per goal.
    ///
    /// # Errors
    /// - `EmptyProjectName` when `name` is blank.
    pub fn add_project(
        &mut self,
        name: &str,
        description: &str,
        goals: &[Goal],
        submitted: &SubmittedContributions,
    ) -> Result<usize, ValidationError> {
        let project = Project::from_input(name, description, goals, submitted)?;
        self.projects.push(project);
        Ok(self.projects.len() - 1)
    }

    /// Removes and returns the project at `index`.
    pub fn delete_project(&mut self, index: usize) -> StoreResult<Project> {
        check_index(index, self.projects.len())?;
        Ok(self.projects.remove(index))
    }

    /// Replaces name, description, and contributions at `index`.
    pub fn update_project(
        &mut self,
        index: usize,
        name: &str,
        description: &str,
        goals: &[Goal],
        submitted: &SubmittedContributions,
    ) -> StoreResult<NameUpdate> {
        check_index(index, self.projects.len())?;
        let project = &mut self.projects[index];
        let name_update = match normalize_name(name) {
            Some(name) => {
                project.name = name;
                NameUpdate::Replaced
            }
            None => NameUpdate::Retained,
        };
        project.description = description.to_string();
        project.contributions = Contributions::from_submission(goals, submitted);
        Ok(name_update)
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl TryFrom<Vec<Project>> for ProjectStore {
    type Error = ValidationError;

    fn try_from(projects: Vec<Project>) -> Result<Self, Self::Error> {
        let projects = projects
            .into_iter()
            .map(|mut project| {
                project.name = normalize_name(project.name.as_str())
                    .ok_or(ValidationError::EmptyProjectName)?;
                Ok(project)
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(Self { projects })
    }
}

impl From<ProjectStore> for Vec<Project> {
    fn from(store: ProjectStore) -> Self {
        store.projects
    }
}

#[cfg(test)]
mod tests {
    use super::{NameUpdate, ProjectStore};
    use crate::model::goal::Goal;
    use crate::model::input::{FieldValue, SubmittedContributions, ValidationError};
    use crate::model::project::Project;
    use crate::store::IndexError;

    fn goals() -> Vec<Goal> {
        vec![
            Goal {
                name: "Trees".to_string(),
                target: 100.0,
                unit: "trees".to_string(),
            },
            Goal {
                name: "Bikes".to_string(),
                target: 20.0,
                unit: String::new(),
            },
        ]
    }

    fn submitted(pairs: &[(&str, f64)]) -> SubmittedContributions {
        pairs
            .iter()
            .map(|(name, amount)| (name.to_string(), FieldValue::from(*amount)))
            .collect()
    }

    #[test]
    fn update_replaces_contributions_wholesale() {
        let goals = goals();
        let mut store = ProjectStore::new();
        store
            .add_project("Park", "", &goals, &submitted(&[("Trees", 40.0), ("Bikes", 2.0)]))
            .expect("add project");

        let outcome = store
            .update_project(0, "Park East", "north side", &goals, &submitted(&[("Trees", 5.0)]))
            .expect("update project");
        assert_eq!(outcome, NameUpdate::Replaced);

        let project = store.get(0).expect("updated project");
        assert_eq!(project.name, "Park East");
        assert_eq!(project.description, "north side");
        assert_eq!(project.contributions.get("Trees"), Some(5.0));
        assert_eq!(project.contributions.get("Bikes"), Some(0.0));
    }

    #[test]
    fn update_with_blank_name_keeps_previous_name() {
        let goals = goals();
        let mut store = ProjectStore::new();
        store
            .add_project("Park", "old", &goals, &SubmittedContributions::new())
            .expect("add project");

        let outcome = store
            .update_project(0, " ", "new", &goals, &SubmittedContributions::new())
            .expect("blank rename still updates");
        assert_eq!(outcome, NameUpdate::Retained);
        assert_eq!(store.get(0).expect("project").name, "Park");
        assert_eq!(store.get(0).expect("project").description, "new");
    }

    #[test]
    fn update_out_of_range_reports_bounds() {
        let mut store = ProjectStore::new();
        let err = store
            .update_project(0, "x", "", &[], &SubmittedContributions::new())
            .expect_err("empty store has no row 0");
        assert_eq!(err, IndexError { index: 0, len: 0 });
    }

    #[test]
    fn snapshot_decoding_trims_and_rejects_blank_names() {
        let project = |name: &str| Project {
            name: name.to_string(),
            description: String::new(),
            contributions: Default::default(),
        };

        let store = ProjectStore::try_from(vec![project(" Park ")]).expect("named project");
        assert_eq!(store.get(0).expect("project").name, "Park");

        let err = ProjectStore::try_from(vec![project("Park"), project(" ")])
            .expect_err("blank name must be rejected");
        assert_eq!(err, ValidationError::EmptyProjectName);
    }
}
