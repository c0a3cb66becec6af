use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scores::TestType;

#[derive(Debug, Parser)]
#[command(
    name = "mobility-qc",
    version,
    about = "Mobility test indicators and classification from sensor samples"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Norms(NormsArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, num_args = 1.., required = true, help = "Evaluation JSON file, optionally .gz (repeatable)")]
    pub input: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Compare evaluations of one patient over time"
    )]
    pub history: bool,

    #[arg(long, help = "Patient age in years (overrides birth date)")]
    pub age: Option<f64>,

    #[arg(long, help = "Elapsed test time in seconds (overrides recorded/derived time)")]
    pub elapsed: Option<f64>,

    #[arg(long, value_enum, help = "Test type (overrides the evaluation file)")]
    pub test_type: Option<TestTypeArg>,

    #[arg(long, help = "Age norms TSV to overlay on the built-in table")]
    pub norms: Option<PathBuf>,

    #[arg(long, default_value_t = 0, help = "Number of threads for batches (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct NormsArgs {
    #[command(subcommand)]
    pub command: NormsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NormsCommand {
    Show(NormsShowArgs),
}

#[derive(Debug, Args)]
pub struct NormsShowArgs {
    #[arg(long, help = "Optional norms TSV to overlay on the built-in table")]
    pub norms: Option<PathBuf>,

    #[arg(long, value_enum, help = "Only show one test type")]
    pub test_type: Option<TestTypeArg>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Evaluation JSON file, optionally .gz")]
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub test_type: Option<TestTypeArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestTypeArg {
    SitToStand,
    TimedUpAndGo,
}

impl From<TestTypeArg> for TestType {
    fn from(arg: TestTypeArg) -> Self {
        match arg {
            TestTypeArg::SitToStand => TestType::SitToStand,
            TestTypeArg::TimedUpAndGo => TestType::TimedUpAndGo,
        }
    }
}
