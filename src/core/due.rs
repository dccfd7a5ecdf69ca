//! Due-date classification and assignment list views

use crate::core::models::{Assignment, Status};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until `due`, rounded up. Negative once `due` has passed.
#[must_use]
pub fn days_until(due: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let millis = due.signed_duration_since(now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Whole calendar days from `today` until `due`
#[must_use]
pub fn days_until_date(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Human label for a days-until value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    /// Due date has passed
    Overdue,
    /// Due within the current day
    Today,
    /// Due within the next day
    Tomorrow,
    /// Due further out
    InDays(i64),
}

impl DueLabel {
    /// Classify a days-until value
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Overdue,
            0 => Self::Today,
            1 => Self::Tomorrow,
            d => Self::InDays(d),
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => write!(f, "Overdue"),
            Self::Today => write!(f, "Due today"),
            Self::Tomorrow => write!(f, "Due tomorrow"),
            Self::InDays(days) => write!(f, "Due in {days} days"),
        }
    }
}

/// Styling class for a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// `days < 0`
    Overdue,
    /// `0 <= days <= 1`
    Urgent,
    /// Anything later
    Normal,
}

impl Urgency {
    /// Classify a days-until value
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Overdue
        } else if days <= 1 {
            Self::Urgent
        } else {
            Self::Normal
        }
    }

    /// Short marker used in terminal listings
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Overdue => "!!",
            Self::Urgent => "! ",
            Self::Normal => "  ",
        }
    }
}

impl Assignment {
    /// Days from `now` until this assignment is due
    #[must_use]
    pub fn days_until(&self, now: NaiveDateTime) -> i64 {
        days_until(self.due_at(), now)
    }

    /// Due label relative to `now`
    #[must_use]
    pub fn due_label(&self, now: NaiveDateTime) -> DueLabel {
        DueLabel::from_days(self.days_until(now))
    }

    /// Urgency relative to `now`
    #[must_use]
    pub fn urgency(&self, now: NaiveDateTime) -> Urgency {
        Urgency::from_days(self.days_until(now))
    }
}

/// Which subset of assignments to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentView {
    /// Everything
    #[default]
    All,
    /// Not started
    Pending,
    /// Started
    InProgress,
    /// Handed in
    Completed,
}

impl AssignmentView {
    /// Whether an assignment with `status` belongs to this view
    #[must_use]
    pub fn includes(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == Status::Pending,
            Self::InProgress => status == Status::InProgress,
            Self::Completed => status == Status::Completed,
        }
    }
}

impl fmt::Display for AssignmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Select and order assignments for a view.
///
/// Lists are ordered soonest-due first by days-until (ties keep data order),
/// except the completed view which lists the latest due date first.
#[must_use]
pub fn view(
    assignments: &[Assignment],
    view: AssignmentView,
    now: NaiveDateTime,
) -> Vec<&Assignment> {
    let mut selected: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| view.includes(a.status))
        .collect();

    if view == AssignmentView::Completed {
        selected.sort_by(|a, b| b.due_date.cmp(&a.due_date));
    } else {
        selected.sort_by_key(|a| a.days_until(now));
    }
    selected
}

/// Headline counts for the assignment tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    /// Past due, regardless of status
    pub overdue: usize,
    /// Due today or tomorrow, regardless of status
    pub due_soon: usize,
    /// Started
    pub in_progress: usize,
    /// Handed in
    pub completed: usize,
}

impl AssignmentStats {
    /// Count over every assignment
    #[must_use]
    pub fn collect(assignments: &[Assignment], now: NaiveDateTime) -> Self {
        assignments
            .iter()
            .fold(Self::default(), |mut stats, a| {
                match a.urgency(now) {
                    Urgency::Overdue => stats.overdue += 1,
                    Urgency::Urgent => stats.due_soon += 1,
                    Urgency::Normal => {}
                }
                match a.status {
                    Status::InProgress => stats.in_progress += 1,
                    Status::Completed => stats.completed += 1,
                    Status::Pending => {}
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn assignment(id: u32, due: NaiveDate, status: Status) -> Assignment {
        let mut a = Assignment::new(id, format!("Task {id}"), "Physics".to_string(), due);
        a.status = status;
        a
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = at(2024, 1, 9, 0);
        assert_eq!(days_until(now + Duration::hours(24), now), 1);
        assert_eq!(days_until(now + Duration::hours(25), now), 2);
        assert_eq!(days_until(now + Duration::minutes(1), now), 1);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now - Duration::minutes(1), now), 0);
        assert_eq!(days_until(now - Duration::hours(24), now), -1);
        assert_eq!(days_until(now - Duration::hours(25), now), -1);
        assert_eq!(days_until(now - Duration::hours(49), now), -2);
    }

    #[test]
    fn test_days_until_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(days_until_date(due, today), 6);
        assert_eq!(days_until_date(today, due), -6);
    }

    #[test]
    fn test_due_label_text() {
        assert_eq!(DueLabel::from_days(-3).to_string(), "Overdue");
        assert_eq!(DueLabel::from_days(0).to_string(), "Due today");
        assert_eq!(DueLabel::from_days(1).to_string(), "Due tomorrow");
        assert_eq!(DueLabel::from_days(6).to_string(), "Due in 6 days");
    }

    #[test]
    fn test_urgency() {
        assert_eq!(Urgency::from_days(-1), Urgency::Overdue);
        assert_eq!(Urgency::from_days(0), Urgency::Urgent);
        assert_eq!(Urgency::from_days(1), Urgency::Urgent);
        assert_eq!(Urgency::from_days(2), Urgency::Normal);
    }

    #[test]
    fn test_midday_now_against_date_only_due() {
        // Due dates count from the start of the day
        let due = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let a = assignment(1, due, Status::Pending);
        assert_eq!(a.due_label(at(2024, 1, 9, 15)), DueLabel::Tomorrow);
        assert_eq!(a.due_label(at(2024, 1, 10, 15)), DueLabel::Today);
        assert_eq!(a.due_label(at(2024, 1, 11, 15)), DueLabel::Overdue);
    }


    #[test]
    fn test_view_orders_by_days_until() {
        let now = at(2024, 1, 10, 0);
        let day = |offset: i64| now.date() + Duration::days(offset);
        let list = vec![
            assignment(1, day(5), Status::Pending),
            assignment(2, day(-2), Status::Pending),
            assignment(3, day(0), Status::InProgress),
            assignment(4, day(1), Status::Pending),
        ];

        let ordered: Vec<i64> = view(&list, AssignmentView::All, now)
            .iter()
            .map(|a| a.days_until(now))
            .collect();
        assert_eq!(ordered, vec![-2, 0, 1, 5]);

        let pending: Vec<u32> = view(&list, AssignmentView::Pending, now)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(pending, vec![2, 4, 1]);
    }

    #[test]
    fn test_completed_view_latest_due_first() {
        let now = at(2024, 1, 10, 0);
        let day = |offset: i64| now.date() + Duration::days(offset);
        let list = vec![
            assignment(1, day(-5), Status::Completed),
            assignment(2, day(3), Status::Completed),
            assignment(3, day(-1), Status::Completed),
            assignment(4, day(-9), Status::Pending),
        ];

        let ids: Vec<u32> = view(&list, AssignmentView::Completed, now)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_stats_count_all_statuses() {
        let now = at(2024, 1, 10, 0);
        let day = |offset: i64| now.date() + Duration::days(offset);
        let list = vec![
            assignment(1, day(-2), Status::Completed),
            assignment(2, day(0), Status::InProgress),
            assignment(3, day(1), Status::Pending),
            assignment(4, day(7), Status::InProgress),
        ];

        let stats = AssignmentStats::collect(&list, now);
        assert_eq!(
            stats,
            AssignmentStats {
                overdue: 1,
                due_soon: 2,
                in_progress: 2,
                completed: 1,
            }
        );
    }
}
