use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::input::sample::SensorSample;
use crate::io::open_maybe_gz;
use crate::scores::TestType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "birthDate")]
    pub birth_date: Option<NaiveDate>,
}

/// Evaluation file as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "testType", deserialize_with = "deserialize_test_type")]
    pub test_type: TestType,
    #[serde(default, alias = "evaluationDate")]
    pub evaluation_date: Option<NaiveDate>,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default, alias = "elapsedSeconds")]
    pub elapsed_seconds: Option<f64>,
    #[serde(default)]
    pub samples: Vec<SensorSample>,
}

fn deserialize_test_type<'de, D>(deserializer: D) -> std::result::Result<TestType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl Evaluation {
    /// Date the evaluation took place: the recorded date, else the date of the
    /// earliest parsable sample.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        if self.evaluation_date.is_some() {
            return self.evaluation_date;
        }
        self.samples
            .iter()
            .filter_map(|s| s.timestamp.to_millis().map(|ms| (ms, s)))
            .min_by_key(|(ms, _)| *ms)
            .and_then(|(_, s)| s.timestamp.date())
    }

    pub fn patient_age_years(&self) -> Option<u32> {
        let birth = self.patient.as_ref()?.birth_date?;
        let on = self.effective_date()?;
        age_in_years(birth, on)
    }
}

/// Whole years between `birth` and `on`; None when `on` precedes `birth`.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    if on < birth {
        return None;
    }
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn load_evaluation(path: &Path) -> Result<Evaluation> {
    let mut reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open evaluation {}", path.display()))?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read evaluation {}", path.display()))?;
    parse_evaluation(&content).with_context(|| format!("malformed evaluation {}", path.display()))
}

pub fn parse_evaluation(content: &str) -> Result<Evaluation> {
    let evaluation: Evaluation = serde_json::from_str(content)?;
    Ok(evaluation)
}
