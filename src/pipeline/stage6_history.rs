use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer::write_history_json;
use crate::pipeline::Stage;
use crate::scores::history::compute_history;

pub struct Stage6History;

impl Stage6History {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6History {
    fn name(&self) -> &'static str {
        "stage6_history"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.history {
            return Ok(());
        }
        let result = compute_history(ctx.history_points.clone())?;
        info!(
            timepoints = result.timepoints.len(),
            trend = %result.trend,
            "history_ready"
        );
        ctx.history_result = Some(result);

        if ctx.write_json {
            let path = ctx.output.out_dir.join("history.json");
            write_history_json(&path, ctx)?;
            info!(path = %path.display(), "history_written");
        }
        Ok(())
    }
}
