//! Fit a regression model described by a JSON configuration file.
//!
//! ```text
//! regfit --config config.json -v
//! ```
//!
//! Training events go to stderr through `tracing`; set `REGFIT_LOG` to
//! change the filter (default `regfit=info`). The fitted equation and a short
//! summary go to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use regfit::data::io::load_csv;
use regfit::model::{RegressionConfig, RegressionModel};
use regfit::training::{StepOutcome, Verbosity};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file.
    #[arg(short, long, env = "REGFIT_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// More training output (`-v` info, `-vv` per-iteration progress).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No training output, only the result.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Silent,
            (false, 0) => Verbosity::Warning,
            (false, 1) => Verbosity::Info,
            (false, _) => Verbosity::Debug,
        }
    }
}

fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("REGFIT_LOG").or_else(|_| EnvFilter::try_new("regfit=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let config = RegressionConfig::load(&args.config)
        .with_context(|| format!("failed to read configuration {}", args.config.display()))?;
    let spec = config.validate()?;
    let data = load_csv(&config.input_file_path)
        .with_context(|| format!("failed to load {}", config.input_file_path.display()))?;

    let solver = spec.solver.with_verbosity(args.verbosity());
    let method = solver.method();
    let mut model = RegressionModel::new(data, spec.regression_type, solver)?;
    let summary = model
        .fit()
        .with_context(|| format!("{} regression did not produce a fit", method.name()))?;

    println!(
        "{} {} regression on {} feature(s), {} sample(s)",
        method.name(),
        model.regression_type().name(),
        model.n_features(),
        model.n_samples()
    );
    println!("{}", model.equation());
    println!("cost: {}", summary.cost);
    match summary.outcome {
        StepOutcome::IterationLimit => {
            println!("stopped after {} iterations without converging", summary.iterations)
        }
        _ if summary.iterations > 0 => {
            println!("converged after {} iterations", summary.iterations)
        }
        _ => {}
    }

    Ok(())
}
