mod logic;
mod util;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use logic::{
    BatchRunner, Execution, RunConfig, SeedRun, resolve_seed_inputs, validate_convergence,
};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "monty-sim", version = "0.1.0")]
#[command(about = "Monty Hall simulator - compares the stay and switch strategies")]
struct Args {
    /// Games per seed [default: 100]
    #[arg(long, short = 'n')]
    trials: Option<usize>,

    /// Seeds to run (comma-separated) [default: 1337]
    #[arg(long)]
    seeds: Option<String>,

    /// Spread trials over all cores, one random stream per trial
    #[arg(long)]
    parallel: bool,

    /// Validate that win rates converge (forces ≥10000 trials)
    #[arg(long)]
    acceptance: bool,

    /// Allowed distance from the expected win rates in acceptance mode [default: 0.03]
    #[arg(long)]
    tolerance: Option<f64>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Optional JSON file providing trials, seeds, parallel and tolerance
    #[arg(long)]
    config: Option<PathBuf>,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    let trials = config.effective_trials(args.acceptance);
    let seeds = resolve_seed_inputs(&config.seeds)?;
    let execution = if config.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };

    if args.report == "console" {
        announce_banner();
    }

    let start_time = Instant::now();
    let runs = BatchRunner::new(trials, execution, args.verbose).run_all(&seeds)?;

    write_reports(&args, &runs, start_time)?;

    if args.acceptance {
        validate_convergence(&runs, config.tolerance)?;
        eprintln!(
            "{}",
            format!("✅ Win rates within ±{} of 1/3 and 2/3", config.tolerance).green()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    println!("{}", "🚪 Monty Hall Simulator".bright_cyan().bold());
    println!("{}", "=======================".cyan());
}

/// Config file values, overridden by any flag given on the command line.
fn resolve_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(seeds) = &args.seeds {
        config.seeds = split_csv(seeds);
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    ensure!(
        config.tolerance.is_finite() && config.tolerance >= 0.0,
        "tolerance must be a non-negative number (got {})",
        config.tolerance
    );
    log::debug!("resolved run config: {config:?}");
    Ok(config)
}

fn write_reports(args: &Args, runs: &[SeedRun], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, runs)?,
        "markdown" => logic::reports::generate_markdown_report(&mut output_target, runs)?,
        "csv" => logic::reports::generate_csv_report(&mut output_target, runs)?,
        _ => logic::reports::generate_console_report(
            &mut output_target,
            runs,
            start_time.elapsed(),
        )?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
