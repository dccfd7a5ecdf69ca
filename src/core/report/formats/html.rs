//! HTML report generator
//!
//! Generates progress reports as a single self-contained HTML page with
//! embedded CSS. The page is rendered from a compiled `askama` template, which
//! escapes every interpolated value.

use crate::core::grades::SubjectMark;
use crate::core::report::{
    AssignmentRow, NoteRow, ReportContext, ReportGenerator, SessionRow, SubjectRow,
};
use askama::Template;
use std::error::Error;

/// Template data for `templates/report.html`
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport<'a> {
    student_name: &'a str,
    university: &'a str,
    major: &'a str,
    year: &'a str,
    generated_on: String,
    week: String,
    gpa: String,
    target_gpa: String,
    gpa_gap: String,
    average: String,
    total_credits: String,
    highest: String,
    lowest: String,
    subjects: Vec<SubjectRow>,
    assignments: Vec<AssignmentRow>,
    sessions: Vec<SessionRow>,
    weekly_hours: String,
    note_total: usize,
    note_shared: usize,
    note_subjects: usize,
    note_mb: String,
    recent_notes: Vec<NoteRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build<'a>(ctx: &'a ReportContext) -> HtmlReport<'a> {
        let profile = &ctx.data.profile;
        let perf = ctx.performance();
        let stats = ctx.note_stats();
        let mark = |m: Option<&SubjectMark>| {
            m.map_or_else(
                || "N/A".to_string(),
                |m| format!("{} ({:.1}%)", m.code, m.percentage),
            )
        };

        HtmlReport {
            student_name: ctx.student_name(),
            university: &profile.university,
            major: &profile.major,
            year: &profile.year,
            generated_on: ctx.generated_on(),
            week: ctx.week(),
            gpa: format!("{:.2}", perf.gpa),
            target_gpa: format!("{:.2}", perf.target_gpa),
            gpa_gap: format!("{:+.2}", perf.gpa_gap()),
            average: format!("{:.1}", perf.average),
            total_credits: format!("{:.1}", perf.total_credits),
            highest: mark(perf.highest.as_ref()),
            lowest: mark(perf.lowest.as_ref()),
            subjects: ctx.subject_rows(),
            assignments: ctx.assignment_rows(),
            sessions: ctx.session_rows(),
            weekly_hours: format!("{:.1}", ctx.weekly_hours()),
            note_total: stats.total,
            note_shared: stats.shared,
            note_subjects: stats.subjects,
            note_mb: format!("{:.1}", stats.total_mb),
            recent_notes: ctx.recent_note_rows(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build(ctx).render()?)
    }
}
