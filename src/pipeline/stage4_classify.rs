use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::stats::round_to;
use crate::pipeline::Stage;
use crate::scores::age_time::classify_time_with_norms;
use crate::scores::indicators::TIME;
use crate::scores::{Classification, TestType};

pub struct Stage4Classify;

impl Stage4Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Classify {
    fn name(&self) -> &'static str {
        "stage4_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        // No indicators means the elapsed time is unusable too.
        let elapsed = ctx.indicators.as_ref().map(|set| round_to(set.elapsed_seconds, 2));
        let (Some(age), Some(elapsed)) = (ctx.age_years, elapsed) else {
            ctx.time_classification = Classification::Unknown;
            return Ok(());
        };
        let test_type = ctx.test_type()?;
        let label = classify_time_with_norms(elapsed, age, test_type, ctx.norms()?);
        if label == Classification::Unknown {
            ctx.warnings
                .push(format!("no {} age norm covers age {}", test_type, age));
        }

        if test_type == TestType::SitToStand && label != Classification::Unknown {
            if let Some(time) = ctx
                .indicators
                .as_mut()
                .and_then(|set| set.indicators.iter_mut().find(|i| i.name == TIME))
            {
                time.classification = label;
            }
        }

        ctx.time_classification = label;
        info!(time_classification = %label, "time_classified");
        Ok(())
    }
}
