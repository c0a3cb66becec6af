use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    DeltaSummary, EvaluationMeta, HistoryResult, Indicator, MobilityQcV1, TimepointSummary,
};
use crate::scores;

pub fn build_report(ctx: &Ctx) -> Result<MobilityQcV1> {
    let evaluation = ctx.evaluation()?;
    let test_type = ctx.test_type()?;

    let age_band = match (ctx.age_years, ctx.norms.as_ref()) {
        (Some(age), Some(norms)) => norms.lookup(test_type, age).map(|n| n.band_label()),
        _ => None,
    };

    let meta = EvaluationMeta {
        id: evaluation.id.clone(),
        patient_id: evaluation.patient.as_ref().and_then(|p| p.id.clone()),
        test_type,
        evaluation_date: evaluation.effective_date().map(|d| d.to_string()),
        age_years: ctx.age_years,
        age_band,
        sample_count: evaluation.samples.len(),
        elapsed_seconds: ctx.elapsed_seconds,
        elapsed_source: ctx.elapsed_source,
    };

    let indicators = ctx.indicators.as_ref().map(|set| {
        set.indicators
            .iter()
            .map(|i| Indicator {
                name: i.name.to_string(),
                value: i.value,
                max_value: i.max_value,
                classification: i.classification,
            })
            .collect::<Vec<_>>()
    });

    Ok(MobilityQcV1 {
        tool: "mobility-qc".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        evaluation: meta,
        indicators,
        time_classification: ctx.time_classification,
        overall_classification: ctx.overall,
        overall_score: ctx.overall_score,
        norms_version: ctx.norms.as_ref().map(|n| n.version.clone()),
        warnings: ctx.warnings.clone(),
        history: ctx.history_result.as_ref().map(history_to_schema),
    })
}

pub fn write_json(path: &Path, report: &MobilityQcV1) -> Result<()> {
    crate::io::write_json(path, report)
}

pub fn history_to_schema(history: &scores::HistoryResult) -> HistoryResult {
    HistoryResult {
        timepoints: history
            .timepoints
            .iter()
            .map(|t| TimepointSummary {
                label: t.label.clone(),
                date: t.date.map(|d| d.to_string()),
                score: t.score,
                overall: t.overall,
            })
            .collect(),
        deltas: history
            .deltas
            .iter()
            .map(|d| DeltaSummary {
                from: d.from.clone(),
                to: d.to.clone(),
                delta_score: d.delta_score,
            })
            .collect(),
        trend: history.trend.clone(),
    }
}

pub fn write_history_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let history = ctx
        .history_result
        .as_ref()
        .context("history result missing")?;
    crate::io::write_json(path, &history_to_schema(history))
}
