pub mod age_time;
pub mod bands;
pub mod history;
pub mod indicators;
pub mod overall;
pub mod steps;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Mobility test protocol an evaluation was recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestType {
    SitToStand,
    TimedUpAndGo,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::SitToStand => "SIT_TO_STAND",
            TestType::TimedUpAndGo => "TIMED_UP_AND_GO",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "SIT_TO_STAND" | "STS" | "FIVE_TIMES_SIT_TO_STAND" => Ok(TestType::SitToStand),
            "TIMED_UP_AND_GO" | "TUG" => Ok(TestType::TimedUpAndGo),
            _ => bail!("unknown test type '{}'", s.trim()),
        }
    }
}

/// Qualitative label attached to indicators and evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Excellent,
    Good,
    Regular,
    Poor,
    Critical,
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Excellent => "Excellent",
            Classification::Good => "Good",
            Classification::Regular => "Regular",
            Classification::Poor => "Poor",
            Classification::Critical => "Critical",
            Classification::Unknown => "Unknown",
        }
    }

    /// Aggregation weight; Unknown weighs nothing.
    pub fn weight(&self) -> u8 {
        match self {
            Classification::Excellent => 5,
            Classification::Good => 4,
            Classification::Regular => 3,
            Classification::Poor => 2,
            Classification::Critical => 1,
            Classification::Unknown => 0,
        }
    }

    /// Lenient parse: anything that is not one of the five graded labels is Unknown.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "excellent" => Classification::Excellent,
            "good" => Classification::Good,
            "regular" => Classification::Regular,
            "poor" => Classification::Poor,
            "critical" => Classification::Critical,
            _ => Classification::Unknown,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorResult {
    pub name: &'static str,
    pub value: f64,
    pub max_value: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub test_type: TestType,
    pub elapsed_seconds: f64,
    pub sample_count: usize,
    pub indicators: Vec<IndicatorResult>,
}

impl IndicatorSet {
    pub fn get(&self, name: &str) -> Option<&IndicatorResult> {
        self.indicators.iter().find(|i| i.name == name)
    }

    pub fn classifications(&self) -> Vec<Classification> {
        self.indicators.iter().map(|i| i.classification).collect()
    }
}

#[derive(Debug, Clone)]
pub struct TimepointSummary {
    pub label: String,
    pub patient_id: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub test_type: TestType,
    pub score: f64,
    pub overall: Classification,
}

#[derive(Debug, Clone)]
pub struct DeltaSummary {
    pub from: String,
    pub to: String,
    pub delta_score: f64,
}

#[derive(Debug, Clone)]
pub struct HistoryResult {
    pub timepoints: Vec<TimepointSummary>,
    pub deltas: Vec<DeltaSummary>,
    pub trend: String,
}
