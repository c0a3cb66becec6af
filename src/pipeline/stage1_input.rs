use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::input::load_evaluation;
use crate::pipeline::Stage;
use crate::schema::v1::ElapsedSource;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let evaluation = load_evaluation(&ctx.input)?;

        let test_type = match ctx.overrides.test_type {
            Some(t) if t != evaluation.test_type => {
                warn!(
                    recorded = %evaluation.test_type,
                    override_ = %t,
                    "test type overridden"
                );
                ctx.warnings.push(format!(
                    "test type overridden: recorded {}, using {}",
                    evaluation.test_type, t
                ));
                t
            }
            Some(t) => t,
            None => evaluation.test_type,
        };

        let (elapsed, source) = match (ctx.overrides.elapsed_seconds, evaluation.elapsed_seconds) {
            (Some(e), _) => (Some(e), ElapsedSource::Override),
            (None, Some(e)) => (Some(e), ElapsedSource::Recorded),
            (None, None) => (None, ElapsedSource::Timestamps),
        };

        let age = match ctx.overrides.age_years {
            Some(age) => Some(age),
            None => evaluation.patient_age_years().map(f64::from),
        };
        if age.is_none() {
            ctx.warnings
                .push("patient age unknown; age-based time classification skipped".to_string());
        }

        info!(
            input = %ctx.input.display(),
            test_type = %test_type,
            samples = evaluation.samples.len(),
            age = ?age,
            "evaluation_loaded"
        );

        ctx.test_type = Some(test_type);
        ctx.elapsed_seconds = elapsed;
        ctx.elapsed_source = source;
        ctx.age_years = age;
        ctx.evaluation = Some(evaluation);
        Ok(())
    }
}
