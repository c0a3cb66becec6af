mod evaluation;
mod sample;

use std::path::{Path, PathBuf};

pub use evaluation::{Evaluation, Patient, age_in_years, load_evaluation, parse_evaluation};
pub use sample::{SensorSample, Timestamp};

/// Label used for per-evaluation output directories and history timepoints.
pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("evaluation");
    let name = name.strip_suffix(".gz").unwrap_or(name);
    let stem = name.strip_suffix(".json").unwrap_or(name);
    if stem.is_empty() {
        "evaluation".to_string()
    } else {
        stem.to_string()
    }
}

pub fn output_dir_for(base: &Path, input: &Path) -> PathBuf {
    base.join(label_from_path(input))
}
