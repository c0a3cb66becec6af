use clap::Parser;
use mobility_qc::cli::{Cli, Commands, NormsCommand, TestTypeArg};

#[test]
fn run_defaults() {
    let cli = Cli::parse_from(["mobility-qc", "run", "--input", "a.json", "--out", "out"]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.input.len(), 1);
            assert!(!args.json);
            assert!(!args.history);
            assert_eq!(args.threads, 0);
            assert!(args.test_type.is_none());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_overrides_are_accepted() {
    let cli = Cli::parse_from([
        "mobility-qc",
        "run",
        "--input",
        "a.json",
        "b.json",
        "--out",
        "out",
        "--history",
        "--age",
        "71",
        "--elapsed",
        "9.5",
        "--test-type",
        "timed-up-and-go",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.input.len(), 2);
            assert!(args.history);
            assert_eq!(args.age, Some(71.0));
            assert_eq!(args.elapsed, Some(9.5));
            assert_eq!(args.test_type, Some(TestTypeArg::TimedUpAndGo));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn unknown_test_type_is_rejected() {
    let res = Cli::try_parse_from([
        "mobility-qc",
        "run",
        "--input",
        "a.json",
        "--out",
        "out",
        "--test-type",
        "hop",
    ]);
    assert!(res.is_err());
}

#[test]
fn norms_show_parses() {
    let cli = Cli::parse_from(["mobility-qc", "norms", "show", "--test-type", "sit-to-stand"]);
    match cli.command {
        Commands::Norms(args) => match args.command {
            NormsCommand::Show(show) => assert_eq!(show.test_type, Some(TestTypeArg::SitToStand)),
        },
        _ => panic!("expected norms command"),
    }
}
