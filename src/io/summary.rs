use std::fmt::Write;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let evaluation = ctx.evaluation()?;
    let test_type = ctx.test_type()?;
    let id = evaluation.id.as_deref().unwrap_or(ctx.label.as_str());

    let mut out = String::new();
    writeln!(out, "mobility-qc v{}", ctx.tool_version)?;
    write!(
        out,
        "Evaluation: {} test={} samples={}",
        id,
        test_type,
        evaluation.samples.len()
    )?;
    if let Some(elapsed) = ctx.elapsed_seconds {
        write!(out, " elapsed={:.2}s", elapsed)?;
    }
    if let Some(age) = ctx.age_years {
        write!(out, " age={}", age)?;
    }
    out.push('\n');

    match &ctx.indicators {
        Some(set) => {
            for i in &set.indicators {
                writeln!(
                    out,
                    "  {:<11} {:>8.2} / {:<5} {}",
                    i.name, i.value, i.max_value, i.classification
                )?;
            }
        }
        None => out.push_str("Indicators: no data\n"),
    }

    writeln!(out, "Time: {}", ctx.time_classification)?;
    match ctx.overall_score {
        Some(score) => writeln!(out, "Overall: {} ({:.2})", ctx.overall, score)?,
        None => writeln!(out, "Overall: {}", ctx.overall)?,
    }
    Ok(out)
}

pub fn format_history(ctx: &Ctx) -> Result<String> {
    let history = ctx
        .history_result
        .as_ref()
        .context("history result missing")?;
    let mut out = String::new();
    writeln!(out, "History trend: {}", history.trend)?;
    for tp in &history.timepoints {
        writeln!(out, "  {}\t{}\t{:.2}", tp.label, tp.overall, tp.score)?;
    }
    for d in &history.deltas {
        writeln!(out, "{} -> {}: dScore={:+.2}", d.from, d.to, d.delta_score)?;
    }
    Ok(out)
}
