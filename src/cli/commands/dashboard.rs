//! Dashboard command handler

use chrono::NaiveDateTime;
use study_hub::core::dashboard::{Dashboard, DashboardSettings};
use study_hub::core::dataset::Dataset;
use study_hub::core::models::weekday_name;
use study_hub::core::timetable::week_label;

/// Print the dashboard for `now`
pub fn run(data: &Dataset, now: NaiveDateTime, settings: DashboardSettings) {
    let dash = Dashboard::build(data, now, settings);

    println!("\nWelcome back, {}!", data.profile.display_name());
    println!("{} ({})", now.format("%A, %B %-d, %Y"), week_label(now.date()));

    println!("\n=== Quick Stats ===");
    println!("Classes today:      {}", dash.todays_classes.len());
    println!("Pending assignments: {}", dash.open_assignments);
    println!("Current GPA:        {:.2}", dash.gpa);
    println!("Notes:              {}", dash.note_count);

    match dash.today {
        Some(day) => {
            println!("\n=== Today's Classes ({}) ===", weekday_name(day));
            if dash.todays_classes.is_empty() {
                println!("No classes scheduled.");
            }
            for session in &dash.todays_classes {
                println!(
                    "{}  {:<24} {:<12} {}",
                    session.start, session.subject, session.room, session.instructor
                );
            }
        }
        None => println!("\nNo classes today."),
    }

    println!("\n=== Upcoming Assignments ===");
    if dash.upcoming.is_empty() {
        println!("Nothing due. Enjoy the break.");
    }
    for item in &dash.upcoming {
        println!(
            "{} {:<40} {:<20} {}",
            item.assignment.urgency(now).marker(),
            item.assignment.title,
            item.assignment.subject,
            item.label
        );
    }

    println!("\n=== Recent Grades ===");
    if dash.recent_grades.is_empty() {
        println!("No graded work yet.");
    }
    for grade in &dash.recent_grades {
        println!(
            "{:<24} {:<20} {}",
            grade.subject, grade.assignment, grade.letter
        );
    }
}
