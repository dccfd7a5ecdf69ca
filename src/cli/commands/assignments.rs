//! Assignments command handler

use chrono::NaiveDateTime;
use study_hub::core::dataset::Dataset;
use study_hub::core::due::{self, AssignmentStats, AssignmentView};
use study_hub::verbose;

/// List assignments for a view, soonest first
pub fn run(data: &Dataset, view: AssignmentView, now: NaiveDateTime) {
    let stats = AssignmentStats::collect(&data.assignments, now);
    println!("\n=== Assignments ({view}) ===");
    println!(
        "Overdue: {}   Due soon: {}   In progress: {}   Completed: {}\n",
        stats.overdue, stats.due_soon, stats.in_progress, stats.completed
    );

    let listed = due::view(&data.assignments, view, now);
    if listed.is_empty() {
        println!("No assignments in this view.");
        return;
    }

    for assignment in listed {
        let when = if assignment.is_completed() {
            format!("Completed ({})", assignment.due_date.format("%b %-d"))
        } else {
            format!(
                "{} ({})",
                assignment.due_label(now),
                assignment.due_date.format("%b %-d")
            )
        };
        println!(
            "{} {:<40} {:<18} {:<7} {:<12} {when}",
            assignment.urgency(now).marker(),
            assignment.title,
            assignment.subject,
            assignment.priority.to_string(),
            assignment.status.to_string()
        );
        if !assignment.description.is_empty() {
            verbose!("     {}", assignment.description);
        }
        if let Some(action) = assignment.status.next_action() {
            let estimate = if assignment.estimated_time.is_empty() {
                String::new()
            } else {
                format!(" (est. {})", assignment.estimated_time)
            };
            verbose!("     Next: {action}{estimate}");
        }
    }
}
