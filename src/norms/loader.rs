use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::norms::AgeNorm;
use crate::scores::TestType;

pub fn load_builtin_v1() -> Result<Vec<AgeNorm>> {
    let content = include_str!("../../assets/norms/time_norms_v1.tsv");
    parse_norms_tsv(content, "built-in v1")
}

pub fn load_norms_tsv(path: &Path) -> Result<Vec<AgeNorm>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read norms TSV {}", path.display()))?;
    parse_norms_tsv(&content, &path.display().to_string())
}

/// Overlay user rows on the built-in table. Rows are keyed by test type and
/// lower age bound; a user row replaces the built-in row with the same key,
/// new keys are appended.
pub fn merge_norms(mut builtin: Vec<AgeNorm>, user: Vec<AgeNorm>) -> Vec<AgeNorm> {
    if user.is_empty() {
        return builtin;
    }
    let mut user_map: HashMap<(TestType, u32), AgeNorm> = HashMap::new();
    let mut user_order = Vec::new();
    for row in user {
        let key = (row.test_type, row.age_min);
        if user_map.insert(key, row).is_none() {
            user_order.push(key);
        }
    }

    let mut merged = Vec::with_capacity(builtin.len() + user_map.len());
    for row in builtin.drain(..) {
        if let Some(user_row) = user_map.remove(&(row.test_type, row.age_min)) {
            merged.push(user_row);
        } else {
            merged.push(row);
        }
    }
    for key in user_order {
        if let Some(row) = user_map.remove(&key) {
            merged.push(row);
        }
    }
    merged
}

fn parse_norms_tsv(content: &str, source: &str) -> Result<Vec<AgeNorm>> {
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if parts.len() != 5 {
            bail!("{}:{} malformed TSV (expected 5 columns)", source, line_no);
        }
        if parts.iter().any(|p| p.is_empty()) {
            bail!("{}:{} empty field in TSV", source, line_no);
        }

        let test_type: TestType = parts[0]
            .parse()
            .with_context(|| format!("{}:{} invalid test type", source, line_no))?;
        let age_min: u32 = parts[1]
            .parse()
            .with_context(|| format!("{}:{} invalid age_min", source, line_no))?;
        let age_max = match parts[2] {
            "-" | "+" => None,
            raw => Some(
                raw.parse::<u32>()
                    .with_context(|| format!("{}:{} invalid age_max", source, line_no))?,
            ),
        };
        let mean: f64 = parts[3]
            .parse()
            .with_context(|| format!("{}:{} invalid mean", source, line_no))?;
        let sd: f64 = parts[4]
            .parse()
            .with_context(|| format!("{}:{} invalid sd", source, line_no))?;

        if let Some(max) = age_max {
            if max < age_min {
                bail!("{}:{} age_max below age_min", source, line_no);
            }
        }
        if !mean.is_finite() || mean <= 0.0 {
            bail!("{}:{} mean must be positive", source, line_no);
        }
        if !sd.is_finite() || sd < 0.0 {
            bail!("{}:{} sd must be non-negative", source, line_no);
        }

        rows.push(AgeNorm {
            test_type,
            age_min,
            age_max,
            mean,
            sd,
        });
    }

    Ok(rows)
}
