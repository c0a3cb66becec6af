use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::input::Evaluation;
use crate::norms::NormTable;
use crate::schema::v1::ElapsedSource;
use crate::scores::{Classification, HistoryResult, IndicatorSet, TestType, TimepointSummary};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Command-line overrides applied on top of what the evaluation file records.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub age_years: Option<f64>,
    pub elapsed_seconds: Option<f64>,
    pub test_type: Option<TestType>,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub label: String,
    pub write_json: bool,
    pub write_tsv: bool,
    pub history: bool,
    pub norms_path: Option<PathBuf>,
    pub overrides: Overrides,
    pub tool_version: String,
    pub evaluation: Option<Evaluation>,
    pub test_type: Option<TestType>,
    pub age_years: Option<f64>,
    pub elapsed_seconds: Option<f64>,
    pub elapsed_source: ElapsedSource,
    pub norms: Option<NormTable>,
    pub indicators: Option<IndicatorSet>,
    pub time_classification: Classification,
    pub overall: Classification,
    pub overall_score: Option<f64>,
    pub history_points: Vec<TimepointSummary>,
    pub history_result: Option<HistoryResult>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("mobility_qc.json");
        let tsv_path = out_dir.join("mobility_qc.tsv");
        Self {
            label: crate::input::label_from_path(&input),
            input,
            write_json,
            write_tsv,
            history: false,
            norms_path: None,
            overrides: Overrides::default(),
            tool_version: tool_version.to_string(),
            evaluation: None,
            test_type: None,
            age_years: None,
            elapsed_seconds: None,
            elapsed_source: ElapsedSource::Timestamps,
            norms: None,
            indicators: None,
            time_classification: Classification::Unknown,
            overall: Classification::Unknown,
            overall_score: None,
            history_points: Vec::new(),
            history_result: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
        }
    }

    pub fn evaluation(&self) -> Result<&Evaluation> {
        self.evaluation.as_ref().context("evaluation not loaded")
    }

    pub fn test_type(&self) -> Result<TestType> {
        self.test_type.context("test type not resolved")
    }

    pub fn norms(&self) -> Result<&NormTable> {
        self.norms.as_ref().context("norms not loaded")
    }

    pub fn sample_count(&self) -> usize {
        self.evaluation.as_ref().map_or(0, |e| e.samples.len())
    }

    pub fn writes_outputs(&self) -> bool {
        self.write_json || self.write_tsv
    }
}
