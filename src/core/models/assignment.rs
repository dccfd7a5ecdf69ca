//! Assignment model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How important an assignment is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be done first
    High,
    /// Default priority
    #[default]
    Medium,
    /// Can wait
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Work state of an assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet
    #[default]
    Pending,
    /// Started but not handed in
    InProgress,
    /// Handed in
    Completed,
}

impl Status {
    /// Label of the action a student would take next, if any
    #[must_use]
    pub const fn next_action(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("Start"),
            Self::InProgress => Some("Continue"),
            Self::Completed => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(format!("Unknown assignment status: {s}")),
        }
    }
}

/// A piece of coursework with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifier, unique within a dataset
    pub id: u32,

    /// Title (e.g., "Literature Essay")
    pub title: String,

    /// Subject name the assignment belongs to
    pub subject: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Calendar date the work is due
    pub due_date: NaiveDate,

    /// Priority
    #[serde(default)]
    pub priority: Priority,

    /// Work state
    #[serde(default)]
    pub status: Status,

    /// Estimated effort as written by the student (e.g., "2 hours")
    #[serde(default)]
    pub estimated_time: String,
}

impl Assignment {
    /// Create a pending, medium-priority assignment
    #[must_use]
    pub const fn new(id: u32, title: String, subject: String, due_date: NaiveDate) -> Self {
        Self {
            id,
            title,
            subject,
            description: String::new(),
            due_date,
            priority: Priority::Medium,
            status: Status::Pending,
            estimated_time: String::new(),
        }
    }

    /// Moment the assignment falls due: the start of its due date
    #[must_use]
    pub fn due_at(&self) -> NaiveDateTime {
        self.due_date.and_time(NaiveTime::MIN)
    }

    /// Whether the assignment has been handed in
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}
