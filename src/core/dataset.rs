//! Planner data file loading and validation

use crate::core::models::{Assignment, ClassSession, Note, Profile, Subject};
use crate::core::notes::parse_size;
use crate::core::timetable::TEACHING_DAY_HOURS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Sample planner data compiled into the binary
const SAMPLE_DATA: &str = include_str!("../assets/sample_data.toml");

/// Tolerance when checking that subject weights add up to 100
const WEIGHT_TOLERANCE: f64 = 0.01;

/// Everything the planner knows about one student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Student profile
    #[serde(default)]
    pub profile: Profile,
    /// Enrolled subjects with graded components
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Tracked assignments with deadlines
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Notes and documents
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Weekly class sessions
    #[serde(default)]
    pub sessions: Vec<ClassSession>,
}

/// A problem found in planner data. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the problem is (e.g., "subject MATH301")
    pub scope: String,
    /// What is wrong
    pub message: String,
}

impl ValidationIssue {
    fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

impl Dataset {
    /// Parse planner data from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or does not match the schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load planner data from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// The sample planner compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded sample is invalid TOML. It is checked by the test suite.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_toml(SAMPLE_DATA).expect("Failed to parse compiled-in sample data")
    }

    /// Look up a subject by course code (case-insensitive)
    #[must_use]
    pub fn subject_by_code(&self, code: &str) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Check the data for inconsistencies the arithmetic tolerates but a student would want to fix
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        self.validate_subjects(&mut issues);
        self.validate_assignments(&mut issues);
        self.validate_notes(&mut issues);
        self.validate_sessions(&mut issues);

        if self.profile.target_gpa < 0.0 || self.profile.target_gpa > 4.0 {
            issues.push(ValidationIssue::new(
                "profile",
                format!(
                    "target GPA {} is outside the 0.0-4.0 scale",
                    self.profile.target_gpa
                ),
            ));
        }
        issues
    }

    fn validate_subjects(&self, issues: &mut Vec<ValidationIssue>) {
        check_unique_ids(self.subjects.iter().map(|s| s.id), "subject", issues);

        for subject in &self.subjects {
            let scope = format!("subject {}", subject.code);

            if subject.credits <= 0.0 {
                issues.push(ValidationIssue::new(&scope, "credit hours must be positive"));
            }

            let total = subject.total_weight();
            if !subject.assignments.is_empty() && (total - 100.0).abs() > WEIGHT_TOLERANCE {
                issues.push(ValidationIssue::new(
                    &scope,
                    format!("assignment weights sum to {total}, expected 100"),
                ));
            }

            for graded in &subject.assignments {
                let item = format!("{scope} / {}", graded.name);
                if graded.weight < 0.0 {
                    issues.push(ValidationIssue::new(&item, "weight is negative"));
                }
                if graded.max_score <= 0.0 {
                    issues.push(ValidationIssue::new(&item, "max score must be positive"));
                }
                if let Some(score) = graded.score {
                    if score < 0.0 {
                        issues.push(ValidationIssue::new(&item, "score is negative"));
                    } else if graded.max_score > 0.0 && score > graded.max_score {
                        issues.push(ValidationIssue::new(
                            &item,
                            format!("score {score} exceeds max score {}", graded.max_score),
                        ));
                    }
                }
            }
        }
    }

    fn validate_assignments(&self, issues: &mut Vec<ValidationIssue>) {
        check_unique_ids(self.assignments.iter().map(|a| a.id), "assignment", issues);

        for assignment in &self.assignments {
            if assignment.title.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    format!("assignment {}", assignment.id),
                    "title is empty",
                ));
            }
        }
    }

    fn validate_notes(&self, issues: &mut Vec<ValidationIssue>) {
        check_unique_ids(self.notes.iter().map(|n| n.id), "note", issues);

        for note in &self.notes {
            if !note.size.is_empty() {
                if let Err(e) = parse_size(&note.size) {
                    issues.push(ValidationIssue::new(format!("note {}", note.id), e));
                }
            }
        }
    }

    fn validate_sessions(&self, issues: &mut Vec<ValidationIssue>) {
        check_unique_ids(self.sessions.iter().map(|s| s.id), "session", issues);

        for session in &self.sessions {
            let scope = format!("session {}", session.id);
            if session.weekday().is_none() {
                issues.push(ValidationIssue::new(
                    &scope,
                    format!("unknown weekday '{}'", session.day),
                ));
            }
            if session.start_time().is_none() {
                issues.push(ValidationIssue::new(
                    &scope,
                    format!("start time '{}' is not HH:MM", session.start),
                ));
            }
            if session.duration.is_nan() || session.duration <= 0.0 {
                issues.push(ValidationIssue::new(&scope, "duration must be positive"));
            } else if session.duration > TEACHING_DAY_HOURS {
                issues.push(ValidationIssue::new(
                    &scope,
                    format!(
                        "duration of {} hours is longer than the teaching day",
                        session.duration
                    ),
                ));
            }
        }
    }
}

fn check_unique_ids(
    ids: impl Iterator<Item = u32>,
    kind: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(ValidationIssue::new(
                format!("{kind} {id}"),
                "duplicate id",
            ));
        }
    }
}
