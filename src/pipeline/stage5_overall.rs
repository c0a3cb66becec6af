use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::Classification;
use crate::scores::overall::{classify_score, weight_score};

pub struct Stage5Overall;

impl Stage5Overall {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Overall {
    fn name(&self) -> &'static str {
        "stage5_overall"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let labels = ctx
            .indicators
            .as_ref()
            .map(|set| set.classifications())
            .unwrap_or_default();
        let score = weight_score(&labels);
        ctx.overall = score.map_or(Classification::Unknown, classify_score);
        ctx.overall_score = score;
        info!(overall = %ctx.overall, score = ?score, "overall_ready");
        Ok(())
    }
}
