//! Weekly timetable: teaching days, hourly slots and the class grid

use crate::core::models::{weekday_name, ClassSession};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};

/// Days classes are held on
pub const TEACHING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Hour of the first slot
pub const FIRST_SLOT_HOUR: u32 = 8;

/// Hour of the last slot
pub const LAST_SLOT_HOUR: u32 = 17;

/// Hours covered by the slots, from the first slot to the end of the last
pub const TEACHING_DAY_HOURS: f64 = 10.0;

/// Start times of the hourly slots
#[must_use]
pub fn time_slots() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .collect()
}

/// The teaching day `date` falls on, if any
#[must_use]
pub fn current_day(date: NaiveDate) -> Option<Weekday> {
    let day = date.weekday();
    TEACHING_DAYS.contains(&day).then_some(day)
}

/// Label for the teaching week containing `date` (e.g., "Week of January 8-12, 2024")
#[must_use]
pub fn week_label(date: NaiveDate) -> String {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date - Duration::days(offset);
    let friday = monday + Duration::days(4);

    if monday.month() == friday.month() {
        format!(
            "Week of {} {}-{}, {}",
            monday.format("%B"),
            monday.day(),
            friday.day(),
            friday.year()
        )
    } else if monday.year() == friday.year() {
        format!(
            "Week of {} {} - {} {}, {}",
            monday.format("%B"),
            monday.day(),
            friday.format("%B"),
            friday.day(),
            friday.year()
        )
    } else {
        format!(
            "Week of {} - {}",
            monday.format("%B %-d, %Y"),
            friday.format("%B %-d, %Y")
        )
    }
}

/// What a grid cell holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCell<'a> {
    /// No class
    Free,
    /// A class starts in this slot
    Start(&'a ClassSession),
    /// A class that started in an earlier slot is still running
    Continued(&'a ClassSession),
}

/// One hourly row of the weekly grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    /// Slot start time
    pub time: NaiveTime,
    /// One cell per teaching day, Monday first
    pub cells: Vec<GridCell<'a>>,
}

/// Read-only view over the sessions of a dataset
#[derive(Debug, Clone, Copy)]
pub struct Timetable<'a> {
    sessions: &'a [ClassSession],
}

impl<'a> Timetable<'a> {
    /// Wrap a list of sessions
    #[must_use]
    pub const fn new(sessions: &'a [ClassSession]) -> Self {
        Self { sessions }
    }

    /// Sessions held on `day`, earliest first
    #[must_use]
    pub fn sessions_for(&self, day: Weekday) -> Vec<&'a ClassSession> {
        let mut list: Vec<&ClassSession> = self
            .sessions
            .iter()
            .filter(|s| s.weekday() == Some(day))
            .collect();
        list.sort_by_key(|s| s.start_time());
        list
    }

    /// Sessions grouped by teaching day, Monday first
    #[must_use]
    pub fn week(&self) -> Vec<(&'static str, Vec<&'a ClassSession>)> {
        TEACHING_DAYS
            .iter()
            .map(|day| (weekday_name(*day), self.sessions_for(*day)))
            .collect()
    }

    /// Total scheduled hours over the week
    #[must_use]
    pub fn weekly_hours(&self) -> f64 {
        self.sessions
            .iter()
            .filter(|s| s.weekday().is_some_and(|d| TEACHING_DAYS.contains(&d)))
            .map(|s| s.duration)
            .sum()
    }

    /// Slot-by-day grid of the week.
    ///
    /// A session is placed only when it starts exactly on a slot boundary
    /// inside the slot range; it then occupies `slot_span` consecutive slots,
    /// clipped at the last slot.
    #[must_use]
    pub fn grid(&self) -> Vec<GridRow<'a>> {
        let slots = time_slots();
        let mut rows: Vec<GridRow<'a>> = slots
            .iter()
            .map(|time| GridRow {
                time: *time,
                cells: vec![GridCell::Free; TEACHING_DAYS.len()],
            })
            .collect();

        for (col, day) in TEACHING_DAYS.iter().enumerate() {
            for session in self.sessions_for(*day) {
                let Some(start) = session.start_time() else {
                    continue;
                };
                if start.minute() != 0 {
                    continue;
                }
                let Some(first) = slots.iter().position(|slot| slot.hour() == start.hour()) else {
                    continue;
                };

                let last = first.saturating_add(session.slot_span()).min(rows.len());
                rows[first].cells[col] = GridCell::Start(session);
                for row in rows.iter_mut().take(last).skip(first + 1) {
                    row.cells[col] = GridCell::Continued(session);
                }
            }
        }
        rows
    }
}
