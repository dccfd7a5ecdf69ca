//! Integration smoke tests for `study_hub`

use study_hub::core::dataset::Dataset;
use study_hub::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_planner_is_available() {
    let data = Dataset::sample();
    assert_eq!(data.profile.display_name(), "John Doe");
    assert!(!data.subjects.is_empty());
}
