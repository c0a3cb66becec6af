use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub const HEADER: &str = "evaluation_id\ttest_type\tindicator\tvalue\tmax_value\tclassification";

/// One row per indicator. An evaluation without indicators writes the header only.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let evaluation = ctx.evaluation()?;
    let test_type = ctx.test_type()?;
    let id = evaluation.id.as_deref().unwrap_or(ctx.label.as_str());

    writeln!(w, "{}", HEADER)?;
    if let Some(set) = &ctx.indicators {
        for i in &set.indicators {
            writeln!(
                w,
                "{}\t{}\t{}\t{:.2}\t{:.0}\t{}",
                id, test_type, i.name, i.value, i.max_value, i.classification
            )?;
        }
    }
    w.flush()?;
    Ok(())
}
