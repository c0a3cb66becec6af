//! Running many evaluations and collecting history timepoints.

use anyhow::Result;
use tracing::warn;

use crate::ctx::Ctx;
use crate::pipeline::Pipeline;
use crate::scores::TimepointSummary;

#[cfg(feature = "mt")]
use rayon::prelude::*;

/// Run the full evaluation pipeline on every ctx. Evaluations are independent;
/// with the `mt` feature they run on a rayon pool of `threads` workers
/// (0 = rayon default). Results keep input order.
pub fn run_evaluations(ctxs: Vec<Ctx>, threads: usize) -> Result<Vec<Result<Ctx>>> {
    #[cfg(feature = "mt")]
    {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if threads > 0 {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        Ok(pool.install(|| ctxs.into_par_iter().map(run_one).collect()))
    }

    #[cfg(not(feature = "mt"))]
    {
        let _ = threads;
        Ok(ctxs.into_iter().map(run_one).collect())
    }
}

fn run_one(mut ctx: Ctx) -> Result<Ctx> {
    Pipeline::evaluation().run(&mut ctx)?;
    Ok(ctx)
}

/// History timepoint for a finished evaluation; None when it produced no indicators.
pub fn build_timepoint(ctx: &Ctx) -> Option<TimepointSummary> {
    let score = ctx.overall_score?;
    let test_type = ctx.test_type?;
    let evaluation = ctx.evaluation.as_ref()?;
    Some(TimepointSummary {
        label: ctx.label.clone(),
        patient_id: evaluation.patient.as_ref().and_then(|p| p.id.clone()),
        date: evaluation.effective_date(),
        test_type,
        score,
        overall: ctx.overall,
    })
}

/// Timepoints of all evaluations that have indicators; the rest are reported
/// as warnings.
pub fn collect_timepoints(ctxs: &[Ctx]) -> (Vec<TimepointSummary>, Vec<String>) {
    let mut points = Vec::with_capacity(ctxs.len());
    let mut warnings = Vec::new();
    for ctx in ctxs {
        match build_timepoint(ctx) {
            Some(tp) => points.push(tp),
            None => {
                warn!(label = %ctx.label, "evaluation skipped in history: no indicators");
                warnings.push(format!(
                    "evaluation '{}' skipped in history: no indicators",
                    ctx.label
                ));
            }
        }
    }
    (points, warnings)
}
