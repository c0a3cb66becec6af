use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod batch;
pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_norms;
pub mod stage3_indicators;
pub mod stage4_classify;
pub mod stage5_overall;
pub mod stage6_history;
pub mod stage7_output;

use stage0_scaffold::Stage0Scaffold;
use stage1_input::Stage1Input;
use stage2_norms::Stage2Norms;
use stage3_indicators::Stage3Indicators;
use stage4_classify::Stage4Classify;
use stage5_overall::Stage5Overall;
use stage6_history::Stage6History;
use stage7_output::Stage7Output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Full single-evaluation run: load, score, classify, write.
    pub fn evaluation() -> Self {
        Self::new(vec![
            Box::new(Stage0Scaffold::new()),
            Box::new(Stage1Input::new()),
            Box::new(Stage2Norms::new()),
            Box::new(Stage3Indicators::new()),
            Box::new(Stage4Classify::new()),
            Box::new(Stage5Overall::new()),
            Box::new(Stage7Output::new()),
        ])
    }

    /// Scoring without writing anything.
    pub fn validate() -> Self {
        Self::new(vec![
            Box::new(Stage1Input::new()),
            Box::new(Stage2Norms::new()),
            Box::new(Stage3Indicators::new()),
            Box::new(Stage4Classify::new()),
            Box::new(Stage5Overall::new()),
        ])
    }

    /// Cross-evaluation comparison over timepoints already collected on the ctx.
    pub fn history() -> Self {
        Self::new(vec![
            Box::new(Stage0Scaffold::new()),
            Box::new(Stage6History::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
