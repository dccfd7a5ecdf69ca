//! Subject and graded-assignment models

use crate::core::grades::{self, LetterGrade, RequiredScore, SubjectStanding};
use serde::{Deserialize, Serialize};

fn default_max_score() -> f64 {
    100.0
}

/// One graded component of a subject (an exam, essay, project...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedAssignment {
    /// Component name (e.g., "Midterm Exam")
    pub name: String,

    /// Achieved score; `None` until the work is graded
    #[serde(default)]
    pub score: Option<f64>,

    /// Contribution to the subject grade, in percent
    pub weight: f64,

    /// Highest attainable score
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

impl GradedAssignment {
    /// Create an ungraded component scored out of 100
    #[must_use]
    pub const fn new(name: String, weight: f64) -> Self {
        Self {
            name,
            score: None,
            weight,
            max_score: 100.0,
        }
    }

    /// Same component with a recorded score
    #[must_use]
    pub fn graded(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Whether a score has been recorded and can be normalised
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.score.is_some() && self.max_score > 0.0
    }

    /// Score as a percentage of the max score, when graded
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        if self.max_score <= 0.0 {
            return None;
        }
        self.score.map(|s| s / self.max_score * 100.0)
    }
}

/// A course the student is enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Identifier, unique within a dataset
    pub id: u32,

    /// Subject name (e.g., "Advanced Mathematics")
    pub name: String,

    /// Course code (e.g., "MATH301")
    pub code: String,

    /// Credit hours
    pub credits: f64,

    /// Percentage the student is aiming for
    #[serde(default)]
    pub target: f64,

    /// Graded components in syllabus order
    #[serde(default)]
    pub assignments: Vec<GradedAssignment>,
}

impl Subject {
    /// Create a subject with no graded components
    #[must_use]
    pub const fn new(id: u32, name: String, code: String, credits: f64) -> Self {
        Self {
            id,
            name,
            code,
            credits,
            target: 0.0,
            assignments: Vec::new(),
        }
    }

    /// Add a graded component
    pub fn add_assignment(&mut self, assignment: GradedAssignment) {
        self.assignments.push(assignment);
    }

    /// Current grade, always derived from the graded components
    #[must_use]
    pub fn current_grade(&self) -> f64 {
        grades::weighted_percentage(&self.assignments)
    }

    /// Letter for the current grade
    #[must_use]
    pub fn letter(&self) -> LetterGrade {
        grades::letter_grade(self.current_grade())
    }

    /// Grade points for the current grade
    #[must_use]
    pub fn grade_points(&self) -> f64 {
        grades::grade_points(self.current_grade())
    }

    /// Percentage and credits, as consumed by [`grades::gpa`]
    #[must_use]
    pub fn standing(&self) -> SubjectStanding {
        SubjectStanding::new(self.current_grade(), self.credits)
    }

    /// Number of components that have a score
    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_graded()).count()
    }

    /// Number of components still waiting for a score
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.assignments.len() - self.graded_count()
    }

    /// Sum of all component weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.assignments.iter().map(|a| a.weight).sum()
    }

    /// Progress of the current grade toward the target, capped at 100
    #[must_use]
    pub fn progress_to_target(&self) -> f64 {
        grades::progress_to_target(self.current_grade(), self.target)
    }

    /// What the remaining components must average to reach `target`
    #[must_use]
    pub fn required_average(&self, target: f64) -> RequiredScore {
        grades::required_average(&self.assignments, target)
    }

    /// Most recently graded component (last graded one in syllabus order)
    #[must_use]
    pub fn latest_graded(&self) -> Option<&GradedAssignment> {
        self.assignments.iter().rev().find(|a| a.is_graded())
    }
}
