use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::norms::load_with_overlay;
use crate::pipeline::Stage;

pub struct Stage2Norms;

impl Stage2Norms {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Norms {
    fn name(&self) -> &'static str {
        "stage2_norms"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = load_with_overlay(ctx.norms_path.as_deref())?;
        let test_type = ctx.test_type()?;
        if table.for_test(test_type).next().is_none() {
            ctx.warnings
                .push(format!("no age norms defined for {}", test_type));
        }
        info!(version = %table.version, rows = table.rows.len(), "norms_loaded");
        ctx.norms = Some(table);
        Ok(())
    }
}
