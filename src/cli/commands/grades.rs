//! Grades command handler
//!
//! Subject breakdowns, the what-if calculator and the GPA summary.

use crate::args::GradesViewArg;
use study_hub::core::dataset::Dataset;
use study_hub::core::grades::{PerformanceSummary, RequiredScore, SubjectMark};
use study_hub::core::models::Subject;
use study_hub::verbose;

/// Run the grades command.
///
/// # Errors
/// Returns an error for an unknown subject code or an out-of-range target
pub fn run(
    data: &Dataset,
    view: GradesViewArg,
    subject: Option<&str>,
    target: Option<f64>,
) -> Result<(), String> {
    if let Some(t) = target {
        if !(0.0..=100.0).contains(&t) {
            return Err(format!("Target must be between 0 and 100, got {t}"));
        }
    }

    let subjects: Vec<&Subject> = match subject {
        Some(code) => vec![data
            .subject_by_code(code)
            .ok_or_else(|| format!("Unknown subject code: '{code}'"))?],
        None => data.subjects.iter().collect(),
    };

    if subjects.is_empty() {
        println!("No subjects recorded.");
        return Ok(());
    }

    match view {
        GradesViewArg::Subjects => print_subjects(&subjects),
        GradesViewArg::Calculator => print_calculator(&subjects, target),
        GradesViewArg::Analytics => print_analytics(&subjects, data.profile.target_gpa),
    }
    Ok(())
}

fn print_subjects(subjects: &[&Subject]) {
    for subject in subjects {
        let current = subject.current_grade();
        println!(
            "\n=== {} {} ({:.1} credits) ===",
            subject.code, subject.name, subject.credits
        );
        println!(
            "Current: {current:.1}% ({})   Target: {:.1}%   Progress: {:.0}%",
            subject.letter(),
            subject.target,
            subject.progress_to_target()
        );
        println!(
            "Completed: {}   Remaining: {}",
            subject.graded_count(),
            subject.remaining_count()
        );

        for component in &subject.assignments {
            let score = match (component.score, component.percentage()) {
                (Some(score), Some(pct)) => {
                    format!("{score}/{} ({pct:.1}%)", component.max_score)
                }
                _ => "not graded".to_string(),
            };
            println!(
                "  {:<24} {:>5.1}%  {score}",
                component.name, component.weight
            );
        }
        verbose!(
            "  Grade points: {:.1}   Total weight: {:.1}",
            subject.grade_points(),
            subject.total_weight()
        );
    }
}

fn print_calculator(subjects: &[&Subject], target: Option<f64>) {
    println!("\n=== What-If Calculator ===");
    for subject in subjects {
        let goal = target.unwrap_or(subject.target);
        let outcome = subject.required_average(goal);
        let note = match outcome {
            RequiredScore::AlreadySecured => "on track".to_string(),
            RequiredScore::Achievable(p) if p >= 90.0 => format!("demanding ({p:.1}%)"),
            RequiredScore::Achievable(_) => "achievable".to_string(),
            RequiredScore::Unreachable(_) => "consider adjusting the target".to_string(),
            RequiredScore::NoRemainingWork { .. } => "final".to_string(),
        };
        println!(
            "{:<8} now {:>5.1}%  target {goal:>5.1}%  {outcome}  [{note}]",
            subject.code,
            subject.current_grade()
        );
    }
}

/// Summary over the selected subjects only
fn analytics_summary(subjects: &[&Subject], target_gpa: f64) -> PerformanceSummary {
    let selected: Vec<Subject> = subjects.iter().map(|s| (*s).clone()).collect();
    PerformanceSummary::from_subjects(&selected, target_gpa)
}

fn print_analytics(subjects: &[&Subject], target_gpa: f64) {
    let summary = analytics_summary(subjects, target_gpa);
    let mark = |m: Option<&SubjectMark>| {
        m.map_or_else(
            || "N/A".to_string(),
            |m| format!("{} ({:.1}%)", m.code, m.percentage),
        )
    };

    println!("\n=== Performance Analytics ===");
    println!("GPA:           {:.2}", summary.gpa);
    if summary.target_gpa > 0.0 {
        println!(
            "Target GPA:    {:.2} (gap {:+.2})",
            summary.target_gpa,
            summary.gpa_gap()
        );
    }
    println!("Average:       {:.1}%", summary.average);
    println!("Total credits: {:.1}", summary.total_credits);
    println!("Highest:       {}", mark(summary.highest.as_ref()));
    println!("Lowest:        {}", mark(summary.lowest.as_ref()));

    println!("\n{:<8} {:>7} {:>6} {:>6} {:>7}", "Code", "Grade", "Letter", "Points", "Credits");
    for subject in subjects {
        println!(
            "{:<8} {:>6.1}% {:>6} {:>6.1} {:>7.1}",
            subject.code,
            subject.current_grade(),
            subject.letter().as_str(),
            subject.grade_points(),
            subject.credits
        );
    }
}
