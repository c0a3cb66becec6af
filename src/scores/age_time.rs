use std::sync::OnceLock;

use crate::norms::{self, NormTable};
use crate::scores::{Classification, TestType};

/// Classify a completion time against the built-in age norms.
pub fn classify_time_by_age(elapsed_seconds: f64, age_years: f64, test_type: TestType) -> Classification {
    static BUILTIN: OnceLock<Option<NormTable>> = OnceLock::new();
    match BUILTIN.get_or_init(|| norms::load_builtin().ok()) {
        Some(table) => classify_time_with_norms(elapsed_seconds, age_years, test_type, table),
        None => Classification::Unknown,
    }
}

/// Classify a completion time against the age band of `table` containing the
/// patient's age. Bands are one standard deviation wide around the mean; this
/// scale has no Poor grade.
pub fn classify_time_with_norms(
    elapsed_seconds: f64,
    age_years: f64,
    test_type: TestType,
    table: &NormTable,
) -> Classification {
    if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
        return Classification::Unknown;
    }
    let Some(norm) = table.lookup(test_type, age_years) else {
        return Classification::Unknown;
    };
    if elapsed_seconds <= norm.mean - norm.sd {
        Classification::Excellent
    } else if elapsed_seconds <= norm.mean + norm.sd {
        Classification::Good
    } else if elapsed_seconds <= norm.mean + 2.0 * norm.sd {
        Classification::Regular
    } else {
        Classification::Critical
    }
}
