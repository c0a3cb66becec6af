//! Age-stratified reference times for the mobility tests.

mod loader;

use std::path::Path;

use anyhow::Result;

pub use loader::{load_builtin_v1, load_norms_tsv, merge_norms};

use crate::scores::TestType;

/// Reference completion time (mean and standard deviation, seconds) for one
/// age band of one test. `age_max` is inclusive; None means open-ended.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeNorm {
    pub test_type: TestType,
    pub age_min: u32,
    pub age_max: Option<u32>,
    pub mean: f64,
    pub sd: f64,
}

impl AgeNorm {
    /// Fractional ages belong to the band of their whole year.
    pub fn contains(&self, age_years: f64) -> bool {
        if !age_years.is_finite() || age_years < self.age_min as f64 {
            return false;
        }
        match self.age_max {
            Some(max) => age_years < max as f64 + 1.0,
            None => true,
        }
    }

    pub fn band_label(&self) -> String {
        match self.age_max {
            Some(max) => format!("{}-{}", self.age_min, max),
            None => format!("{}+", self.age_min),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NormTable {
    pub version: String,
    pub rows: Vec<AgeNorm>,
}

impl NormTable {
    /// First band (in table order) of `test_type` that contains the age.
    pub fn lookup(&self, test_type: TestType, age_years: f64) -> Option<&AgeNorm> {
        self.rows
            .iter()
            .find(|r| r.test_type == test_type && r.contains(age_years))
    }

    pub fn for_test(&self, test_type: TestType) -> impl Iterator<Item = &AgeNorm> {
        self.rows.iter().filter(move |r| r.test_type == test_type)
    }
}

pub fn load_builtin() -> Result<NormTable> {
    let rows = load_builtin_v1()?;
    Ok(NormTable {
        version: "v1".to_string(),
        rows,
    })
}

/// Built-in table, optionally overlaid with a user TSV.
pub fn load_with_overlay(user: Option<&Path>) -> Result<NormTable> {
    let mut table = load_builtin()?;
    if let Some(path) = user {
        let user_rows = load_norms_tsv(path)?;
        table.rows = merge_norms(table.rows, user_rows);
        table.version = format!("{}+user", table.version);
    }
    Ok(table)
}
