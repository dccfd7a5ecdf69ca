//! Integration tests for loading planner data files

use std::fs;
use study_hub::core::dataset::Dataset;
use study_hub::core::models::{NoteKind, Priority, Status};
use tempfile::TempDir;

const PLANNER: &str = r#"
[profile]
name = "Ada"
university = "Analytical University"
major = "Mathematics"
target_gpa = 3.5

[[subjects]]
id = 1
name = "Number Theory"
code = "MATH210"
credits = 3
target = 85

[[subjects.assignments]]
name = "Homework"
score = 18
max_score = 20
weight = 40

[[subjects.assignments]]
name = "Final"
weight = 60

[[assignments]]
id = 1
title = "Problem Set 4"
subject = "Number Theory"
due_date = "2024-03-01"
priority = "high"
status = "in-progress"

[[notes]]
id = 1
title = "Primes cheat sheet"
subject = "Number Theory"
kind = "reference"
last_modified = "2024-02-20"
size = "120 KB"
shared = true
tags = ["primes"]

[[sessions]]
id = 1
day = "Wednesday"
start = "10:00"
duration = 1.5
subject = "Number Theory"
room = "B12"
"#;

#[test]
fn load_planner_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("planner.toml");
    fs::write(&path, PLANNER).expect("Failed to write planner");

    let data = Dataset::load(&path).expect("Failed to load planner");

    assert_eq!(data.profile.display_name(), "Ada");
    assert_eq!(data.subjects.len(), 1);
    assert!((data.subjects[0].current_grade() - 90.0).abs() < 1e-9);

    let assignment = &data.assignments[0];
    assert_eq!(assignment.priority, Priority::High);
    assert_eq!(assignment.status, Status::InProgress);
    assert!(assignment.description.is_empty());

    assert_eq!(data.notes[0].kind, NoteKind::Reference);
    assert!(data.notes[0].shared);
    assert_eq!(data.sessions[0].slot_span(), 2);

    assert!(data.validate().is_empty(), "{:?}", data.validate());
}

#[test]
fn missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(Dataset::load(temp_dir.path().join("nope.toml")).is_err());
}

#[test]
fn malformed_dates_are_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("planner.toml");
    fs::write(
        &path,
        "[[assignments]]\nid = 1\ntitle = \"x\"\nsubject = \"y\"\ndue_date = \"next week\"\n",
    )
    .expect("Failed to write planner");

    assert!(Dataset::load(&path).is_err());
}

#[test]
fn defaults_fill_optional_fields() {
    let data = Dataset::from_toml(
        "[[assignments]]\nid = 7\ntitle = \"Read\"\nsubject = \"History\"\ndue_date = \"2024-01-20\"\n",
    )
    .expect("Failed to parse planner");

    let assignment = &data.assignments[0];
    assert_eq!(assignment.priority, Priority::Medium);
    assert_eq!(assignment.status, Status::Pending);
    assert_eq!(data.profile.display_name(), "Student");
}

#[test]
fn validation_flags_weight_totals() {
    let data = Dataset::from_toml(
        r#"
[[subjects]]
id = 1
name = "Art"
code = "ART100"
credits = 2

[[subjects.assignments]]
name = "Portfolio"
weight = 70
"#,
    )
    .expect("Failed to parse planner");

    let issues = data.validate();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].scope, "subject ART100");
    assert!(issues[0].message.contains("weights sum to 70"));
}
