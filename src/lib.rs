//! Shared library for `StudyHub`
//! Contains the planner model, grade and deadline logic, reports and configuration

pub mod core;
pub mod logger;

pub use core::{config, get_version};
