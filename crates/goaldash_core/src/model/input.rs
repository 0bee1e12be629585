//! Raw form input values and their normalization rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submitted per-goal values keyed by goal name.
///
/// Keys that do not name a current goal are ignored when contributions are
/// built.
pub type SubmittedContributions = BTreeMap<String, FieldValue>;

/// One numeric form field as delivered by the UI.
///
/// Accepts JSON numbers, strings, or `null` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Value already parsed by the UI widget.
    Number(f64),
    /// Free text that still needs parsing.
    Text(String),
    /// Field left blank.
    #[default]
    Empty,
}

impl FieldValue {
    /// Returns the finite numeric value, if any.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(raw) => parse_amount(raw),
            Self::Empty => None,
        }
    }

    /// Returns whether the field carries no input at all.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(raw) => raw.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parses one numeric amount from free text.
///
/// Returns `None` for blank, unparsable, or non-finite input.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Trims a user-supplied name. Returns `None` when blank.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Input validation errors for add/edit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Goal name is blank after trim.
    EmptyGoalName,
    /// Goal target field was left blank.
    MissingTarget,
    /// Goal target could not be parsed as a finite number.
    NonNumericTarget(String),
    /// Another goal already uses this name.
    DuplicateGoalName(String),
    /// Project name is blank after trim.
    EmptyProjectName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGoalName => write!(f, "goal name must not be blank"),
            Self::MissingTarget => write!(f, "goal target is required"),
            Self::NonNumericTarget(raw) => write!(f, "goal target is not a number: `{raw}`"),
            Self::DuplicateGoalName(name) => write!(f, "goal name already exists: `{name}`"),
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{normalize_name, parse_amount, FieldValue};

    #[test]
    fn parse_amount_trims_and_rejects_garbage() {
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("-3"), Some(-3.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn field_value_reads_numbers_and_text() {
        assert_eq!(FieldValue::from(4.0).as_amount(), Some(4.0));
        assert_eq!(FieldValue::from("7").as_amount(), Some(7.0));
        assert_eq!(FieldValue::Number(f64::NAN).as_amount(), None);
        assert_eq!(FieldValue::Empty.as_amount(), None);
        assert!(FieldValue::from("   ").is_blank());
        assert!(!FieldValue::from("x").is_blank());
    }

    #[test]
    fn field_value_decodes_untagged_json() {
        let number: FieldValue = serde_json::from_str("40").expect("number decodes");
        let text: FieldValue = serde_json::from_str("\"40\"").expect("text decodes");
        let empty: FieldValue = serde_json::from_str("null").expect("null decodes");
        assert_eq!(number, FieldValue::Number(40.0));
        assert_eq!(text, FieldValue::Text("40".to_string()));
        assert_eq!(empty, FieldValue::Empty);
    }

    #[test]
    fn normalize_name_rejects_blank() {
        assert_eq!(normalize_name("  Trees "), Some("Trees".to_string()));
        assert_eq!(normalize_name(" \t "), None);
    }
}
