//! Core module for planner functionality

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod due;
pub mod grades;
pub mod models;
pub mod notes;
pub mod report;
pub mod timetable;

/// Returns the current version of the `StudyHub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
