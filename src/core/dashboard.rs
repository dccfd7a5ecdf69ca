//! Dashboard roll-up: today's classes, urgent work, recent grades

use crate::core::dataset::Dataset;
use crate::core::due::DueLabel;
use crate::core::grades::{self, letter_grade, LetterGrade};
use crate::core::models::{Assignment, ClassSession, Status};
use crate::core::notes::DEFAULT_RECENT_LIMIT;
use crate::core::timetable::{current_day, Timetable};
use chrono::{NaiveDateTime, Weekday};

/// Default number of urgent assignments on the dashboard
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// List sizes for the dashboard and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    /// How many upcoming assignments to show
    pub upcoming_assignments: usize,
    /// How many notes the recent view shows
    pub recent_notes: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            upcoming_assignments: DEFAULT_UPCOMING_LIMIT,
            recent_notes: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// An open assignment with its deadline label
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingItem<'a> {
    /// The assignment
    pub assignment: &'a Assignment,
    /// Days until due
    pub days: i64,
    /// Label for `days`
    pub label: DueLabel,
}

/// The latest graded component of a subject
#[derive(Debug, Clone, PartialEq)]
pub struct RecentGrade<'a> {
    /// Subject name
    pub subject: &'a str,
    /// Component name
    pub assignment: &'a str,
    /// Letter for the component's own percentage
    pub letter: LetterGrade,
}

/// Everything shown on the dashboard at a given moment
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    /// Teaching day of `now`, if any
    pub today: Option<Weekday>,
    /// Sessions held today
    pub todays_classes: Vec<&'a ClassSession>,
    /// Open assignments, soonest first
    pub upcoming: Vec<UpcomingItem<'a>>,
    /// Latest grade per subject
    pub recent_grades: Vec<RecentGrade<'a>>,
    /// Number of assignments not yet completed
    pub open_assignments: usize,
    /// Credit-weighted GPA
    pub gpa: f64,
    /// Number of notes
    pub note_count: usize,
}

impl<'a> Dashboard<'a> {
    /// Build the dashboard for `now`
    #[must_use]
    pub fn build(data: &'a Dataset, now: NaiveDateTime, settings: DashboardSettings) -> Self {
        let today = current_day(now.date());
        let todays_classes = today
            .map(|day| Timetable::new(&data.sessions).sessions_for(day))
            .unwrap_or_default();

        let mut open: Vec<&Assignment> = data
            .assignments
            .iter()
            .filter(|a| a.status != Status::Completed)
            .collect();
        open.sort_by_key(|a| a.days_until(now));
        let open_assignments = open.len();

        let upcoming = open
            .into_iter()
            .take(settings.upcoming_assignments)
            .map(|assignment| {
                let days = assignment.days_until(now);
                UpcomingItem {
                    assignment,
                    days,
                    label: DueLabel::from_days(days),
                }
            })
            .collect();

        let recent_grades = data
            .subjects
            .iter()
            .filter_map(|subject| {
                let graded = subject.latest_graded()?;
                Some(RecentGrade {
                    subject: &subject.name,
                    assignment: &graded.name,
                    letter: letter_grade(graded.percentage()?),
                })
            })
            .collect();

        Self {
            today,
            todays_classes,
            upcoming,
            recent_grades,
            open_assignments,
            gpa: grades::subjects_gpa(&data.subjects),
            note_count: data.notes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tuesday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_dashboard_from_sample() {
        let data = Dataset::sample();
        let dash = Dashboard::build(&data, tuesday_morning(), DashboardSettings::default());

        assert_eq!(dash.today, Some(Weekday::Tue));
        let rooms: Vec<&str> = dash.todays_classes.iter().map(|s| s.room.as_str()).collect();
        assert_eq!(rooms, vec!["Lab 105", "Lab 301"]);

        assert_eq!(dash.open_assignments, 4);
        let titles: Vec<&str> = dash
            .upcoming
            .iter()
            .map(|u| u.assignment.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Mathematics Assignment 3",
                "Computer Science Project Phase 1",
                "Literature Essay"
            ]
        );
        assert_eq!(dash.upcoming[0].label, DueLabel::Tomorrow);

        assert_eq!(dash.recent_grades.len(), 4);
        assert_eq!(dash.recent_grades[2].assignment, "Lab Report 2");
        assert_eq!(dash.recent_grades[2].letter, LetterGrade::B);
        assert_eq!(dash.note_count, 6);
        assert!((dash.gpa - 41.7 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekend_has_no_classes() {
        let data = Dataset::sample();
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 13)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let dash = Dashboard::build(&data, saturday, DashboardSettings::default());
        assert!(dash.today.is_none());
        assert!(dash.todays_classes.is_empty());
    }
}
