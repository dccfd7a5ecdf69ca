//! Report generation module for academic progress
//!
//! This module renders a snapshot of the planner (profile, grades, deadlines,
//! timetable and notes) in Markdown or HTML.

pub mod formats;

use crate::core::dashboard::DashboardSettings;
use crate::core::dataset::Dataset;
use crate::core::grades::{GradeBand, PerformanceSummary};
use crate::core::models::Assignment;
use crate::core::notes::{self, NoteStats};
use crate::core::timetable::{week_label, Timetable};
use chrono::NaiveDateTime;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One subject line of the grade table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    /// Course code
    pub code: String,
    /// Subject name
    pub name: String,
    /// Credit hours, one decimal
    pub credits: String,
    /// Current percentage, one decimal
    pub percentage: String,
    /// Letter grade
    pub letter: String,
    /// Graded components out of total, e.g. "3/4"
    pub graded: String,
    /// What the remaining work needs for the subject target
    pub outlook: String,
    /// CSS class for the percentage band
    pub band: &'static str,
}

/// One assignment line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    /// Title
    pub title: String,
    /// Subject name
    pub subject: String,
    /// Due date (YYYY-MM-DD)
    pub due: String,
    /// Due label relative to the report time
    pub label: String,
    /// Priority
    pub priority: String,
    /// Status
    pub status: String,
}

/// One class line of the weekly timetable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    /// Weekday name
    pub day: String,
    /// Start time as written in the data
    pub start: String,
    /// Duration in hours
    pub duration: String,
    /// Subject name
    pub subject: String,
    /// Room
    pub room: String,
    /// Instructor
    pub instructor: String,
}

/// One recently modified note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    /// Title
    pub title: String,
    /// Subject name
    pub subject: String,
    /// Relative modified label
    pub modified: String,
    /// Size as written in the data
    pub size: String,
}

/// Data context for report generation
///
/// Aggregates everything a report template needs, computed against a fixed
/// point in time so both formats agree.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Planner data
    pub data: &'a Dataset,
    /// Moment the report describes
    pub now: NaiveDateTime,
    /// List sizes
    pub settings: DashboardSettings,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(data: &'a Dataset, now: NaiveDateTime, settings: DashboardSettings) -> Self {
        Self {
            data,
            now,
            settings,
        }
    }

    /// Student name for the header
    #[must_use]
    pub fn student_name(&self) -> &str {
        self.data.profile.display_name()
    }

    /// Report date (YYYY-MM-DD)
    #[must_use]
    pub fn generated_on(&self) -> String {
        self.now.format("%Y-%m-%d").to_string()
    }

    /// Label of the week containing the report date
    #[must_use]
    pub fn week(&self) -> String {
        week_label(self.now.date())
    }

    /// GPA, credits and best/worst subjects
    #[must_use]
    pub fn performance(&self) -> PerformanceSummary {
        PerformanceSummary::from_subjects(&self.data.subjects, self.data.profile.target_gpa)
    }

    /// Grade table rows in data order
    #[must_use]
    pub fn subject_rows(&self) -> Vec<SubjectRow> {
        self.data
            .subjects
            .iter()
            .map(|subject| {
                let percentage = subject.current_grade();
                SubjectRow {
                    code: subject.code.clone(),
                    name: subject.name.clone(),
                    credits: format!("{:.1}", subject.credits),
                    percentage: format!("{percentage:.1}"),
                    letter: subject.letter().to_string(),
                    graded: format!("{}/{}", subject.graded_count(), subject.assignments.len()),
                    outlook: subject.required_average(subject.target).to_string(),
                    band: GradeBand::from_percentage(percentage).css_class(),
                }
            })
            .collect()
    }

    /// Every assignment ordered by due date, earliest first
    #[must_use]
    pub fn assignment_rows(&self) -> Vec<AssignmentRow> {
        let mut assignments: Vec<&Assignment> = self.data.assignments.iter().collect();
        assignments.sort_by_key(|a| a.due_date);
        assignments
            .into_iter()
            .map(|a| AssignmentRow {
                title: a.title.clone(),
                subject: a.subject.clone(),
                due: a.due_date.format("%Y-%m-%d").to_string(),
                label: if a.is_completed() {
                    "Completed".to_string()
                } else {
                    a.due_label(self.now).to_string()
                },
                priority: a.priority.to_string(),
                status: a.status.to_string(),
            })
            .collect()
    }

    /// Weekly timetable rows, Monday first
    #[must_use]
    pub fn session_rows(&self) -> Vec<SessionRow> {
        Timetable::new(&self.data.sessions)
            .week()
            .into_iter()
            .flat_map(|(day, sessions)| {
                sessions.into_iter().map(move |s| SessionRow {
                    day: day.to_string(),
                    start: s.start.clone(),
                    duration: format!("{}h", s.duration),
                    subject: s.subject.clone(),
                    room: s.room.clone(),
                    instructor: s.instructor.clone(),
                })
            })
            .collect()
    }

    /// Total scheduled hours per week
    #[must_use]
    pub fn weekly_hours(&self) -> f64 {
        Timetable::new(&self.data.sessions).weekly_hours()
    }

    /// Headline note numbers
    #[must_use]
    pub fn note_stats(&self) -> NoteStats {
        NoteStats::collect(&self.data.notes)
    }

    /// Most recently modified notes
    #[must_use]
    pub fn recent_note_rows(&self) -> Vec<NoteRow> {
        let today = self.now.date();
        notes::recent(&self.data.notes, self.settings.recent_notes)
            .into_iter()
            .map(|n| NoteRow {
                title: n.title.clone(),
                subject: n.subject.clone(),
                modified: notes::modified_label(n.last_modified, today),
                size: if n.size.is_empty() {
                    "-".to_string()
                } else {
                    n.size.clone()
                },
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
