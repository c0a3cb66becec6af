use serde::{Deserialize, Serialize};

use crate::scores::{Classification, TestType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedSource {
    Timestamps,
    Recorded,
    Override,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMeta {
    pub id: Option<String>,
    pub patient_id: Option<String>,
    pub test_type: TestType,
    pub evaluation_date: Option<String>,
    pub age_years: Option<f64>,
    pub age_band: Option<String>,
    pub sample_count: usize,
    pub elapsed_seconds: Option<f64>,
    pub elapsed_source: ElapsedSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub value: f64,
    pub max_value: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimepointSummary {
    pub label: String,
    pub date: Option<String>,
    pub score: f64,
    pub overall: Classification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaSummary {
    pub from: String,
    pub to: String,
    pub delta_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResult {
    pub timepoints: Vec<TimepointSummary>,
    pub deltas: Vec<DeltaSummary>,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobilityQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub evaluation: EvaluationMeta,
    /// None when the samples did not support any indicator.
    pub indicators: Option<Vec<Indicator>>,
    pub time_classification: Classification,
    pub overall_classification: Classification,
    pub overall_score: Option<f64>,
    pub norms_version: Option<String>,
    pub warnings: Vec<String>,
    pub history: Option<HistoryResult>,
}
