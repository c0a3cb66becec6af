use crate::scores::Classification;

/// Mean aggregation weight of `labels`, or None for an empty list.
pub fn weight_score(labels: &[Classification]) -> Option<f64> {
    if labels.is_empty() {
        return None;
    }
    let total: u32 = labels.iter().map(|l| l.weight() as u32).sum();
    Some(total as f64 / labels.len() as f64)
}

pub fn classify_score(score: f64) -> Classification {
    if score >= 4.6 {
        Classification::Excellent
    } else if score >= 3.6 {
        Classification::Good
    } else if score >= 2.6 {
        Classification::Regular
    } else if score >= 1.6 {
        Classification::Poor
    } else {
        Classification::Critical
    }
}

/// Reduce indicator labels to one overall label by their mean weight.
///
/// Unknown labels count toward the average with weight 0. An empty list has
/// nothing to summarize and yields Unknown.
pub fn aggregate_classification(labels: &[Classification]) -> Classification {
    match weight_score(labels) {
        Some(score) => classify_score(score),
        None => Classification::Unknown,
    }
}

/// Same as [`aggregate_classification`] for free-form label strings.
pub fn aggregate_labels<S: AsRef<str>>(labels: &[S]) -> Classification {
    let parsed: Vec<Classification> = labels
        .iter()
        .map(|l| Classification::from_label(l.as_ref()))
        .collect();
    aggregate_classification(&parsed)
}
