//! Step counting by peak detection on the acceleration magnitude series.

/// Minimum spacing between two counted steps.
pub const MIN_STEP_INTERVAL_MS: i64 = 300;

/// A peak must exceed the series mean by this factor.
pub const PEAK_MEAN_FACTOR: f64 = 1.1;

/// Count steps in a time-ordered magnitude series.
///
/// A step is a local maximum (strictly above its left neighbour, not below its
/// right one) that exceeds `mean * PEAK_MEAN_FACTOR` and comes at least
/// `MIN_STEP_INTERVAL_MS` after the previously counted step. The first and last
/// samples never count as peaks.
pub fn count_steps(norm: &[f64], times_ms: &[i64], mean: f64) -> usize {
    let n = norm.len().min(times_ms.len());
    if n < 3 {
        return 0;
    }
    let threshold = mean * PEAK_MEAN_FACTOR;
    let mut steps = 0usize;
    let mut last_peak_ms: Option<i64> = None;

    for i in 1..n - 1 {
        let center = norm[i];
        if center <= threshold {
            continue;
        }
        if !(center > norm[i - 1] && center >= norm[i + 1]) {
            continue;
        }
        if let Some(last) = last_peak_ms {
            if times_ms[i].saturating_sub(last) < MIN_STEP_INTERVAL_MS {
                continue;
            }
        }
        steps += 1;
        last_peak_ms = Some(times_ms[i]);
    }

    steps
}
