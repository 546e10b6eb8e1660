use std::io;
use anyhow::Context;
use clap::{ArgAction, Parser};
use mergeit::{Config, run};
use tracing_subscriber::EnvFilter;

/// Merges pre-sorted files of integers or strings into one sorted file.
///
/// Usage: mergeit [OPTIONS] [-a|-d] <-i|-s> <OUTPUT> <INPUT>...
///
///   -a  ascending order (default)
///   -d  descending order
///   -i  the files contain integers
///   -s  the files contain strings without spaces, ordered by length
///
/// The output file must already exist; it is overwritten. Lines that are
/// malformed or break the order of their file are skipped and reported.
#[derive(Parser)]
#[command(name = "mergeit", version, about)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Number of threads used to validate the input files
    #[arg(long, env = "MERGEIT_JOBS")]
    jobs: Option<usize>,

    /// [-a|-d] <-i|-s> <OUTPUT> <INPUT>...
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut config = Config::default();
    if let Some(jobs) = cli.jobs {
        config.jobs = jobs.max(1);
    }
    let stdout = io::stdout();
    let mut console = stdout.lock();
    run(&cli.args, &config, &mut console).context("merge aborted")?;
    Ok(())
}
