use anyhow::{Result, bail};

use crate::scores::{DeltaSummary, HistoryResult, TimepointSummary};

/// Score change (in aggregation weight units) that counts as a real trend.
const TREND_THRESHOLD: f64 = 0.5;

/// Compare consecutive evaluations of one patient. Timepoints with a date are
/// ordered by it; undated timepoints keep their input order after the dated ones.
pub fn compute_history(mut timepoints: Vec<TimepointSummary>) -> Result<HistoryResult> {
    if timepoints.len() < 2 {
        bail!("history requires at least 2 evaluations with indicators");
    }

    let test_type = timepoints[0].test_type;
    if timepoints.iter().any(|tp| tp.test_type != test_type) {
        bail!("history requires evaluations of a single test type");
    }
    let mut patients = timepoints.iter().filter_map(|tp| tp.patient_id.as_deref());
    if let Some(first) = patients.next() {
        if let Some(other) = patients.find(|id| *id != first) {
            bail!(
                "history requires evaluations of a single patient (found '{}' and '{}')",
                first,
                other
            );
        }
    }
    for tp in &timepoints {
        if !tp.score.is_finite() {
            bail!("non-finite score in timepoint '{}'", tp.label);
        }
    }

    timepoints.sort_by_key(|tp| (tp.date.is_none(), tp.date));

    let deltas = timepoints
        .windows(2)
        .map(|win| DeltaSummary {
            from: win[0].label.clone(),
            to: win[1].label.clone(),
            delta_score: win[1].score - win[0].score,
        })
        .collect::<Vec<_>>();

    let first = &timepoints[0];
    let last = &timepoints[timepoints.len() - 1];
    let change = last.score - first.score;
    let trend = if change >= TREND_THRESHOLD {
        "improving"
    } else if change <= -TREND_THRESHOLD {
        "declining"
    } else {
        "stable"
    };

    Ok(HistoryResult {
        timepoints,
        deltas,
        trend: trend.to_string(),
    })
}
