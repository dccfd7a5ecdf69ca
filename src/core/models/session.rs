//! Class session model

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Parse a weekday name ("Monday", "mon", ...)
///
/// # Errors
/// Returns an error if the name is not an English weekday
pub fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| format!("Unknown weekday: '{value}'"))
}

/// Full English name of a weekday
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A weekly recurring class meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Identifier, unique within a dataset
    pub id: u32,

    /// Weekday name as written in the data file (e.g., "Monday")
    pub day: String,

    /// Start time as `HH:MM`
    pub start: String,

    /// Length in hours
    pub duration: f64,

    /// Subject name
    pub subject: String,

    /// Room (e.g., "Lab 105")
    #[serde(default)]
    pub room: String,

    /// Instructor name
    #[serde(default)]
    pub instructor: String,
}

impl ClassSession {
    /// Create a session
    #[must_use]
    pub const fn new(id: u32, day: String, start: String, duration: f64, subject: String) -> Self {
        Self {
            id,
            day,
            start,
            duration,
            subject,
            room: String::new(),
            instructor: String::new(),
        }
    }

    /// Parsed weekday, if the name is valid
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        parse_weekday(&self.day).ok()
    }

    /// Parsed start time, if it is a valid `HH:MM`
    #[must_use]
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.start.trim(), "%H:%M").ok()
    }

    /// Number of whole hourly slots the session occupies (at least one)
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slot_span(&self) -> usize {
        if self.duration.is_finite() && self.duration > 1.0 {
            self.duration.ceil() as usize
        } else {
            1
        }
    }
}
