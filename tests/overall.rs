use mobility_qc::scores::Classification::{self, *};
use mobility_qc::scores::overall::{aggregate_classification, aggregate_labels, weight_score};

#[test]
fn uniform_labels_keep_their_grade() {
    assert_eq!(aggregate_classification(&[Excellent, Excellent]), Excellent);
    assert_eq!(aggregate_classification(&[Critical, Critical]), Critical);
    assert_eq!(aggregate_classification(&[Poor]), Poor);
}

#[test]
fn extremes_average_to_regular() {
    assert_eq!(weight_score(&[Excellent, Critical]), Some(3.0));
    assert_eq!(aggregate_classification(&[Excellent, Critical]), Regular);
}

#[test]
fn thresholds_are_inclusive() {
    // (5 + 5 + 5 + 4 + 4) / 5 = 4.6
    assert_eq!(
        aggregate_classification(&[Excellent, Excellent, Excellent, Good, Good]),
        Excellent
    );
    // (4 + 4 + 4 + 3 + 3) / 5 = 3.6
    assert_eq!(aggregate_classification(&[Good, Good, Good, Regular, Regular]), Good);
    // (4 + 4 + 4 + 4 + 5) / 5 = 4.2
    assert_eq!(aggregate_classification(&[Good, Good, Good, Good, Excellent]), Good);
    // (2 + 1) / 2 = 1.5
    assert_eq!(aggregate_classification(&[Poor, Critical]), Critical);
}

#[test]
fn unknown_counts_as_zero() {
    assert_eq!(weight_score(&[Excellent, Unknown]), Some(2.5));
    assert_eq!(aggregate_classification(&[Excellent, Unknown]), Poor);
    assert_eq!(aggregate_labels(&["Excellent", "not-a-label"]), Poor);
    assert_eq!(aggregate_labels(&["good", " GOOD "]), Good);
}

#[test]
fn empty_input_is_unknown() {
    let none: [Classification; 0] = [];
    assert_eq!(weight_score(&none), None);
    assert_eq!(aggregate_classification(&none), Unknown);
    let no_labels: [&str; 0] = [];
    assert_eq!(aggregate_labels(&no_labels), Unknown);
}
