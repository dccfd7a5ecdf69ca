//! Student profile model

use serde::{Deserialize, Serialize};

/// Who the planner belongs to and what they are aiming for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Student name
    #[serde(default)]
    pub name: String,

    /// University name
    #[serde(default)]
    pub university: String,

    /// Major (e.g., "Computer Science")
    #[serde(default)]
    pub major: String,

    /// Academic year (e.g., "Junior")
    #[serde(default)]
    pub year: String,

    /// Target GPA on the 4.0 scale
    #[serde(default)]
    pub target_gpa: f64,
}

impl Profile {
    /// Name to show in headers, falling back to a generic label
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Student"
        } else {
            &self.name
        }
    }
}
