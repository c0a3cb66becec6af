use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::indicators::compute_indicators;

pub struct Stage3Indicators;

impl Stage3Indicators {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Indicators {
    fn name(&self) -> &'static str {
        "stage3_indicators"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let test_type = ctx.test_type()?;
        let evaluation = ctx.evaluation()?;
        let samples = evaluation.samples.len();
        let indicators = compute_indicators(&evaluation.samples, test_type, ctx.elapsed_seconds);

        match &indicators {
            Some(set) => {
                if ctx.elapsed_seconds.is_none() {
                    ctx.elapsed_seconds = Some(set.elapsed_seconds);
                }
                info!(
                    count = set.indicators.len(),
                    elapsed_s = set.elapsed_seconds,
                    "indicators_ready"
                );
            }
            None => {
                warn!(samples, "not enough usable data for indicators");
                ctx.warnings.push(format!(
                    "not enough usable sensor data for indicators ({} samples)",
                    samples
                ));
            }
        }

        ctx.indicators = indicators;
        Ok(())
    }
}
