//! Note model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of study material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteKind {
    /// Lecture or reading notes
    #[default]
    Notes,
    /// General document
    Document,
    /// Lab write-up
    LabReport,
    /// Essay draft
    Essay,
    /// Research material
    Research,
    /// Cheat sheet or reference card
    Reference,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Notes => "notes",
            Self::Document => "document",
            Self::LabReport => "lab-report",
            Self::Essay => "essay",
            Self::Research => "research",
            Self::Reference => "reference",
        };
        f.write_str(label)
    }
}

/// A stored note or document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier, unique within a dataset
    pub id: u32,

    /// Title
    pub title: String,

    /// Subject name
    pub subject: String,

    /// Kind of material
    #[serde(default)]
    pub kind: NoteKind,

    /// Date of the last edit
    pub last_modified: NaiveDate,

    /// Human-readable size (e.g., "2.3 MB", "950 KB")
    #[serde(default)]
    pub size: String,

    /// Whether the note is shared with classmates
    #[serde(default)]
    pub shared: bool,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Create an unshared note with no tags
    #[must_use]
    pub const fn new(id: u32, title: String, subject: String, last_modified: NaiveDate) -> Self {
        Self {
            id,
            title,
            subject,
            kind: NoteKind::Notes,
            last_modified,
            size: String::new(),
            shared: false,
            tags: Vec::new(),
        }
    }

    /// Add a tag, ignoring duplicates
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_dedup() {
        let mut note = Note::new(
            1,
            "World War II Timeline".to_string(),
            "History".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        );
        note.add_tag("wwii".to_string());
        note.add_tag("wwii".to_string());
        note.add_tag("timeline".to_string());
        assert_eq!(note.tags, vec!["wwii", "timeline"]);
    }

    #[test]
    fn test_kind_serde_spelling() {
        let note: Note = toml::from_str(
            r#"
id = 3
title = "Physics Lab - Pendulum Experiment"
subject = "Physics"
kind = "lab-report"
last_modified = "2024-01-06"
size = "950 KB"
shared = true
tags = ["physics", "lab"]
"#,
        )
        .unwrap();
        assert_eq!(note.kind, NoteKind::LabReport);
        assert_eq!(note.kind.to_string(), "lab-report");
        assert!(note.shared);
    }
}
