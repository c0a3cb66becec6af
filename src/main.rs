use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mobility_qc::cli::{Cli, Commands, NormsCommand, NormsShowArgs, RunArgs, ValidateArgs};
use mobility_qc::ctx::{Ctx, Overrides};
use mobility_qc::input;
use mobility_qc::io;
use mobility_qc::norms;
use mobility_qc::pipeline::Pipeline;
use mobility_qc::pipeline::batch::{collect_timepoints, run_evaluations};
use mobility_qc::scores::TestType;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Norms(args) => match args.command {
            NormsCommand::Show(show) => handle_norms_show(show)?,
        },
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    if args.history && args.input.len() < 2 {
        bail!("--history requires at least 2 --input values");
    }

    let overrides = Overrides {
        age_years: args.age,
        elapsed_seconds: args.elapsed,
        test_type: args.test_type.map(TestType::from),
    };

    if args.input.len() == 1 && !args.history {
        let mut ctx = make_ctx(&args, &args.input[0], args.out.clone(), &overrides);
        Pipeline::evaluation().run(&mut ctx)?;
        print_summary(&ctx)?;
        return Ok(());
    }

    let mut seen = HashSet::new();
    for path in &args.input {
        let label = input::label_from_path(path);
        if !seen.insert(label.clone()) {
            bail!("duplicate evaluation label '{}' in --input", label);
        }
    }

    let ctxs = args
        .input
        .iter()
        .map(|path| {
            let out_dir = input::output_dir_for(&args.out, path);
            make_ctx(&args, path, out_dir, &overrides)
        })
        .collect::<Vec<_>>();

    let mut done = Vec::with_capacity(ctxs.len());
    let mut failures = 0usize;
    for (path, result) in args.input.iter().zip(run_evaluations(ctxs, args.threads)?) {
        match result {
            Ok(ctx) => {
                print_summary(&ctx)?;
                done.push(ctx);
            }
            Err(err) => {
                failures += 1;
                tracing::error!(input = %path.display(), error = %err, "evaluation failed");
            }
        }
    }
    if failures > 0 {
        bail!("{} of {} evaluations failed", failures, args.input.len());
    }

    if args.history {
        let mut master = make_ctx(&args, &args.input[0], args.out.clone(), &overrides);
        master.history = true;
        let (points, warnings) = collect_timepoints(&done);
        master.history_points = points;
        master.warnings.extend(warnings);
        Pipeline::history().run(&mut master)?;
        print!("{}", io::summary::format_history(&master)?);
        print_warnings(&master.warnings);
    }

    Ok(())
}

fn make_ctx(args: &RunArgs, input: &Path, out_dir: PathBuf, overrides: &Overrides) -> Ctx {
    let mut ctx = Ctx::new(
        input.to_path_buf(),
        out_dir,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.norms_path = args.norms.clone();
    ctx.overrides = overrides.clone();
    ctx
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in warnings {
            println!("- {}", warning);
        }
    }
}

fn handle_norms_show(args: NormsShowArgs) -> Result<()> {
    let table = norms::load_with_overlay(args.norms.as_deref())?;
    let filter = args.test_type.map(TestType::from);
    println!("age norms (version {}):", table.version);
    for row in &table.rows {
        if filter.is_some_and(|t| t != row.test_type) {
            continue;
        }
        println!(
            "{}\t{}\t{:.2}\t{:.2}",
            row.test_type,
            row.band_label(),
            row.mean,
            row.sd
        );
    }
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        PathBuf::from("."),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.overrides.test_type = args.test_type.map(TestType::from);
    Pipeline::validate().run(&mut ctx)?;

    println!("mobility-qc validate ok");
    println!("test type: {}", ctx.test_type()?);
    println!("samples: {}", ctx.sample_count());
    match ctx.elapsed_seconds {
        Some(e) => println!("elapsed: {:.2}s", e),
        None => println!("elapsed: unknown"),
    }
    match &ctx.indicators {
        Some(set) => println!("indicators: {}", set.indicators.len()),
        None => println!("indicators: no data"),
    }
    print_warnings(&ctx.warnings);
    Ok(())
}
