//! Check command handler

use study_hub::core::dataset::Dataset;
use study_hub::warn;

/// Validate planner data and list every problem found.
///
/// Returns `true` when the data is clean.
pub fn run(data: &Dataset, source: &str) -> bool {
    let issues = data.validate();
    println!(
        "Checked {source}: {} subjects, {} assignments, {} notes, {} classes",
        data.subjects.len(),
        data.assignments.len(),
        data.notes.len(),
        data.sessions.len()
    );

    if issues.is_empty() {
        println!("✓ No problems found");
        return true;
    }

    for issue in &issues {
        warn!("{issue}");
        println!("  - {issue}");
    }
    println!("✗ {} problem(s) found", issues.len());
    false
}
