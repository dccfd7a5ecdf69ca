//! Timetable command handler

use chrono::{NaiveDateTime, Weekday};
use study_hub::core::dataset::Dataset;
use study_hub::core::models::weekday_name;
use study_hub::core::timetable::{current_day, week_label, GridCell, Timetable, TEACHING_DAYS};

const CELL_WIDTH: usize = 14;

/// Print one day's classes, or the weekly grid when no day is given
pub fn run(data: &Dataset, day: Option<Weekday>, now: NaiveDateTime) {
    let table = Timetable::new(&data.sessions);
    println!("\n=== {} ===", week_label(now.date()));
    println!("{:.1} scheduled hours per week", table.weekly_hours());

    if let Some(day) = day {
        print_day(&table, day);
    } else {
        print_grid(&table, current_day(now.date()));
    }
}

fn print_day(table: &Timetable, day: Weekday) {
    println!("\n{}", weekday_name(day));
    let sessions = table.sessions_for(day);
    if sessions.is_empty() {
        println!("  No classes.");
        return;
    }
    for session in sessions {
        println!(
            "  {} ({}h)  {:<24} {:<12} {}",
            session.start, session.duration, session.subject, session.room, session.instructor
        );
    }
}

fn print_grid(table: &Timetable, today: Option<Weekday>) {
    print!("\n{:<6}", "");
    for day in TEACHING_DAYS {
        let mut name = weekday_name(day).to_string();
        if Some(day) == today {
            name.push('*');
        }
        print!(" {name:<CELL_WIDTH$}");
    }
    println!();

    for row in table.grid() {
        print!("{:<6}", row.time.format("%H:%M"));
        for cell in &row.cells {
            let text = match cell {
                GridCell::Free => String::new(),
                GridCell::Start(session) => truncate(&session.subject),
                GridCell::Continued(_) => "  |".to_string(),
            };
            print!(" {text:<CELL_WIDTH$}");
        }
        println!();
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > CELL_WIDTH {
        let mut short: String = text.chars().take(CELL_WIDTH - 1).collect();
        short.push('.');
        short
    } else {
        text.to_string()
    }
}
