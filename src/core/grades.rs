//! Grade aggregation: weighted percentages, letter grades, grade points and GPA
//!
//! Every function here is total. Empty inputs and zero denominators produce 0
//! rather than an error or a NaN.

use crate::core::models::{GradedAssignment, Subject};
use std::fmt;

/// Letter grade on the plus/minus scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    /// 97 and above
    APlus,
    /// 93 to below 97
    A,
    /// 90 to below 93
    AMinus,
    /// 87 to below 90
    BPlus,
    /// 83 to below 87
    B,
    /// 80 to below 83
    BMinus,
    /// 77 to below 80
    CPlus,
    /// 73 to below 77
    C,
    /// 70 to below 73
    CMinus,
    /// 67 to below 70
    DPlus,
    /// 65 to below 67
    D,
    /// Below 65
    F,
}

impl LetterGrade {
    /// Printed form (e.g., "A-")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds, highest first
const LETTER_THRESHOLDS: [(f64, LetterGrade); 11] = [
    (97.0, LetterGrade::APlus),
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (65.0, LetterGrade::D),
];

/// Inclusive lower bounds on the 4.0 scale. Deliberately has no 65 bucket.
const GRADE_POINT_THRESHOLDS: [(f64, f64); 10] = [
    (97.0, 4.0),
    (93.0, 3.7),
    (90.0, 3.3),
    (87.0, 3.0),
    (83.0, 2.7),
    (80.0, 2.3),
    (77.0, 2.0),
    (73.0, 1.7),
    (70.0, 1.3),
    (67.0, 1.0),
];

/// Weighted percentage over the graded entries only.
///
/// Sums `(score / max) * weight` and `weight` over entries that have a score,
/// then returns `100 * points / weight`. Ungraded entries are left out of both
/// sums, so partial completion is normalised rather than counted as zero.
/// Returns 0 when nothing is graded.
#[must_use]
pub fn weighted_percentage(assignments: &[GradedAssignment]) -> f64 {
    let (points, weight) = graded_totals(assignments);
    if weight > 0.0 {
        points / weight * 100.0
    } else {
        0.0
    }
}

/// Earned weighted points and graded weight
fn graded_totals(assignments: &[GradedAssignment]) -> (f64, f64) {
    assignments
        .iter()
        .filter(|a| a.is_graded())
        .fold((0.0, 0.0), |(points, weight), a| {
            let score = a.score.unwrap_or(0.0);
            (points + score / a.max_score * a.weight, weight + a.weight)
        })
}

/// Letter grade for a percentage
#[must_use]
pub fn letter_grade(percentage: f64) -> LetterGrade {
    LETTER_THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map_or(LetterGrade::F, |(_, letter)| *letter)
}

/// Grade points on the 4.0 scale for a percentage
#[must_use]
pub fn grade_points(percentage: f64) -> f64 {
    GRADE_POINT_THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map_or(0.0, |(_, points)| *points)
}

/// A subject's contribution to GPA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectStanding {
    /// Current percentage
    pub percentage: f64,
    /// Credit hours
    pub credits: f64,
}

impl SubjectStanding {
    /// Create a standing
    #[must_use]
    pub const fn new(percentage: f64, credits: f64) -> Self {
        Self {
            percentage,
            credits,
        }
    }
}

/// Credit-weighted mean of grade points.
///
/// Standings with a zero percentage (nothing graded yet) are left out of the
/// denominator entirely. Returns 0 when nothing qualifies.
#[must_use]
pub fn gpa(standings: &[SubjectStanding]) -> f64 {
    let (points, credits) = standings
        .iter()
        .filter(|s| s.percentage != 0.0)
        .fold((0.0, 0.0), |(points, credits), s| {
            (
                points + grade_points(s.percentage) * s.credits,
                credits + s.credits,
            )
        });
    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// GPA over subjects, each graded by its derived current grade
#[must_use]
pub fn subjects_gpa(subjects: &[Subject]) -> f64 {
    let standings: Vec<SubjectStanding> = subjects.iter().map(Subject::standing).collect();
    gpa(&standings)
}

/// Colour band used when displaying a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    /// 90 and above
    Excellent,
    /// 80 to below 90
    Good,
    /// 70 to below 80
    Fair,
    /// Below 70
    Poor,
}

impl GradeBand {
    /// Band for a percentage
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 80.0 {
            Self::Good
        } else if percentage >= 70.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// CSS class name used by the HTML report
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "grade-excellent",
            Self::Good => "grade-good",
            Self::Fair => "grade-fair",
            Self::Poor => "grade-poor",
        }
    }
}

/// Progress of `current` toward `target` as a percentage, capped at 100
#[must_use]
pub fn progress_to_target(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0)
}

/// Outcome of the what-if calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredScore {
    /// The target is reached even with zero on everything left
    AlreadySecured,
    /// Average needed on the remaining work (0 < p <= 100)
    Achievable(f64),
    /// Average needed exceeds 100
    Unreachable(f64),
    /// Everything is graded already
    NoRemainingWork {
        /// The final weighted percentage
        final_percentage: f64,
    },
}

impl fmt::Display for RequiredScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySecured => write!(f, "target secured"),
            Self::Achievable(p) => write!(f, "needs {p:.1}% on remaining work"),
            Self::Unreachable(p) => write!(f, "out of reach (would need {p:.1}%)"),
            Self::NoRemainingWork { final_percentage } => {
                write!(f, "all graded, final {final_percentage:.1}%")
            }
        }
    }
}

/// Average percentage the ungraded entries must reach for the subject to end at `target`.
///
/// Uses the full weight of every entry: with total weight `W`, earned weighted
/// points `E` and ungraded weight `U`, the answer is `(target * W / 100 - E) / U * 100`.
#[must_use]
pub fn required_average(assignments: &[GradedAssignment], target: f64) -> RequiredScore {
    let total_weight: f64 = assignments.iter().map(|a| a.weight).sum();
    let (earned, graded_weight) = graded_totals(assignments);
    let remaining_weight = total_weight - graded_weight;

    if remaining_weight <= 0.0 {
        return RequiredScore::NoRemainingWork {
            final_percentage: weighted_percentage(assignments),
        };
    }

    let needed_points = target * total_weight / 100.0 - earned;
    if needed_points <= 0.0 {
        return RequiredScore::AlreadySecured;
    }

    let needed = needed_points / remaining_weight * 100.0;
    if needed <= 100.0 {
        RequiredScore::Achievable(needed)
    } else {
        RequiredScore::Unreachable(needed)
    }
}

/// Subject reference with its current percentage
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMark {
    /// Course code
    pub code: String,
    /// Current percentage
    pub percentage: f64,
}

/// Cross-subject performance figures
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    /// Best graded subject
    pub highest: Option<SubjectMark>,
    /// Weakest graded subject
    pub lowest: Option<SubjectMark>,
    /// Mean percentage over every subject
    pub average: f64,
    /// Sum of credit hours over every subject
    pub total_credits: f64,
    /// Credit-weighted GPA
    pub gpa: f64,
    /// GPA the student is aiming for
    pub target_gpa: f64,
}

impl PerformanceSummary {
    /// Compute the summary for a set of subjects
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_subjects(subjects: &[Subject], target_gpa: f64) -> Self {
        let marks: Vec<SubjectMark> = subjects
            .iter()
            .map(|s| SubjectMark {
                code: s.code.clone(),
                percentage: s.current_grade(),
            })
            .collect();

        let graded = marks.iter().filter(|m| m.percentage != 0.0);
        let highest = graded
            .clone()
            .max_by(|a, b| a.percentage.total_cmp(&b.percentage))
            .cloned();
        let lowest = graded
            .min_by(|a, b| a.percentage.total_cmp(&b.percentage))
            .cloned();

        let average = if marks.is_empty() {
            0.0
        } else {
            marks.iter().map(|m| m.percentage).sum::<f64>() / marks.len() as f64
        };

        Self {
            highest,
            lowest,
            average,
            total_credits: subjects.iter().map(|s| s.credits).sum(),
            gpa: subjects_gpa(subjects),
            target_gpa,
        }
    }

    /// Gap between target and current GPA (positive when below target)
    #[must_use]
    pub fn gpa_gap(&self) -> f64 {
        self.target_gpa - self.gpa
    }
}
