//! CLI command handlers for `StudyHub`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod assignments;
pub mod check;
pub mod config;
pub mod dashboard;
pub mod grades;
pub mod notes;
pub mod report;
pub mod timetable;
