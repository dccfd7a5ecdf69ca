//! Markdown report generator
//!
//! Generates progress reports in Markdown with pipe tables. These render well
//! in GitHub, GitLab, and VS Code.

use crate::core::grades::SubjectMark;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let profile = &ctx.data.profile;
        let perf = ctx.performance();
        let stats = ctx.note_stats();

        let values: Vec<(&str, String)> = vec![
            // Header
            ("student_name", ctx.student_name().to_string()),
            ("university", or_dash(&profile.university).to_string()),
            ("major", or_dash(&profile.major).to_string()),
            ("year", or_dash(&profile.year).to_string()),
            ("generated_on", ctx.generated_on()),
            ("week", ctx.week()),
            // Summary
            ("gpa", format!("{:.2}", perf.gpa)),
            ("target_gpa", format!("{:.2}", perf.target_gpa)),
            ("gpa_gap", format!("{:+.2}", perf.gpa_gap())),
            ("average", format!("{:.1}", perf.average)),
            ("total_credits", format!("{:.1}", perf.total_credits)),
            ("highest", mark_label(perf.highest.as_ref())),
            ("lowest", mark_label(perf.lowest.as_ref())),
            // Tables
            ("subject_table", Self::generate_subject_table(ctx)),
            ("assignment_table", Self::generate_assignment_table(ctx)),
            ("weekly_hours", format!("{:.1}", ctx.weekly_hours())),
            ("timetable", Self::generate_timetable(ctx)),
            // Notes
            ("note_total", stats.total.to_string()),
            ("note_subjects", stats.subjects.to_string()),
            ("note_shared", stats.shared.to_string()),
            ("note_mb", format!("{:.1}", stats.total_mb)),
            ("recent_notes", Self::generate_note_table(ctx)),
        ];

        fill_placeholders(MARKDOWN_TEMPLATE, &values)
    }

    /// Generate the per-subject grade table
    fn generate_subject_table(ctx: &ReportContext) -> String {
        let rows = ctx.subject_rows();
        if rows.is_empty() {
            return "_No subjects recorded._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Code | Subject | Credits | Grade | Letter | Graded | Outlook |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {}% | {} | {} | {} |",
                cell(&row.code),
                cell(&row.name),
                row.credits,
                row.percentage,
                row.letter,
                row.graded,
                row.outlook
            );
        }
        table
    }

    /// Generate the assignment table, earliest due date first
    fn generate_assignment_table(ctx: &ReportContext) -> String {
        let rows = ctx.assignment_rows();
        if rows.is_empty() {
            return "_No assignments recorded._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Due | Assignment | Subject | Priority | Status | |\n");
        table.push_str("|---|---|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} |",
                row.due,
                cell(&row.title),
                cell(&row.subject),
                row.priority,
                row.status,
                row.label
            );
        }
        table
    }

    /// Generate the weekly class list
    fn generate_timetable(ctx: &ReportContext) -> String {
        let rows = ctx.session_rows();
        if rows.is_empty() {
            return "_No classes scheduled._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Day | Start | Length | Subject | Room | Instructor |\n");
        table.push_str("|---|---|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} |",
                row.day,
                row.start,
                row.duration,
                cell(&row.subject),
                cell(or_dash(&row.room)),
                cell(or_dash(&row.instructor))
            );
        }
        table
    }

    /// Generate the recent notes table
    fn generate_note_table(ctx: &ReportContext) -> String {
        let rows = ctx.recent_note_rows();
        if rows.is_empty() {
            return String::new();
        }

        let mut table = String::new();
        table.push_str("| Note | Subject | Modified | Size |\n");
        table.push_str("|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                cell(&row.title),
                cell(&row.subject),
                row.modified,
                row.size
            );
        }
        table
    }
}

/// Escape pipes so free text cannot break a table row
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Replace every `{{name}}` in `template` with its value in a single pass.
///
/// Substituted text is never rescanned, so values containing braces are
/// copied through as-is. Unknown placeholders are left in place.
fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            output.push_str(&rest[open..]);
            return output;
        };

        let name = &after[..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }

    output.push_str(rest);
    output
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}

fn mark_label(mark: Option<&SubjectMark>) -> String {
    mark.map_or_else(
        || "N/A".to_string(),
        |m| format!("{} ({:.1}%)", m.code, m.percentage),
    )
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::DashboardSettings;
    use crate::core::dataset::Dataset;
    use chrono::NaiveDate;

    #[test]
    fn test_markdown_has_no_leftover_placeholders() {
        let data = Dataset::sample();
        let now = NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let ctx = ReportContext::new(&data, now, DashboardSettings::default());
        let report = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(!report.contains("{{"), "unreplaced placeholder in:\n{report}");
        assert!(report.starts_with("# Academic Report: John Doe"));
        assert!(report.contains("| GPA | 2.98 |"));
        assert!(report.contains("| MATH301 | Advanced Mathematics |"));
        assert!(report.contains("Week of January 8-12, 2024"));
    }

    #[test]
    fn test_empty_dataset_renders() {
        let data = Dataset::default();
        let now = NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let ctx = ReportContext::new(&data, now, DashboardSettings::default());
        let report = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(report.contains("# Academic Report: Student"));
        assert!(report.contains("_No subjects recorded._"));
        assert!(report.contains("| Highest | N/A |"));
    }

    #[test]
    fn test_placeholder_text_in_data_is_not_substituted() {
        let mut data = Dataset::sample();
        data.profile.name = "{{gpa}}".to_string();
        data.profile.major = "{{subject_table}}".to_string();
        let now = NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let ctx = ReportContext::new(&data, now, DashboardSettings::default());
        let report = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(report.starts_with("# Academic Report: {{gpa}}"));
        assert!(report.contains("{{subject_table}}"));
        assert_eq!(report.matches("| Code | Subject |").count(), 1);
    }

    #[test]
    fn test_fill_placeholders() {
        let values = vec![("a", "1".to_string()), ("b", "{{a}}".to_string())];
        assert_eq!(fill_placeholders("{{a}}-{{b}}", &values), "1-{{a}}");
        assert_eq!(fill_placeholders("{{x}} {{a}}", &values), "{{x}} 1");
        assert_eq!(fill_placeholders("open {{a", &values), "open {{a");
    }

    #[test]
    fn test_cell_escapes_pipes() {
        assert_eq!(cell("a|b"), "a\\|b");
    }
}
