//! Write a synthetic experiment in the regfit input format.
//!
//! ```text
//! regfit-datagen quadratic-bivariate --seed 7 --output generated.csv
//! regfit-datagen linear-univariate --samples 50 --intercept 1 --slope 2
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use regfit::data::io::write_csv;
use regfit::testing::data::{
    linear_trivariate, linear_univariate, quadratic_bivariate, quadratic_trivariate,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    scenario: Scenario,

    /// Output file; stdout when omitted.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Scenario {
    /// Exact line `y = intercept + slope·x`, no noise.
    LinearUnivariate {
        #[arg(long, default_value_t = 20)]
        samples: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        intercept: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        slope: f64,
    },
    /// Noisy paraboloid over two features.
    QuadraticBivariate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Three periodic features, label linear in the first two.
    LinearTrivariate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Three features along a noisy torus knot.
    QuadraticTrivariate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

impl Scenario {
    fn generate(&self) -> Vec<Vec<f64>> {
        match *self {
            Self::LinearUnivariate {
                samples,
                intercept,
                slope,
            } => linear_univariate(samples, intercept, slope),
            Self::QuadraticBivariate { seed } => quadratic_bivariate(seed),
            Self::LinearTrivariate { seed } => linear_trivariate(seed),
            Self::QuadraticTrivariate { seed } => quadratic_trivariate(seed),
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("REGFIT_LOG")
        .or_else(|_| EnvFilter::try_new("regfit_datagen=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    let args = Args::parse();
    let rows = args.scenario.generate();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_csv(&mut writer, &rows)?;
            writer.flush()?;
            info!(
                path = %path.display(),
                n_features = rows.len().saturating_sub(1),
                n_samples = rows.first().map_or(0, Vec::len),
                "wrote synthetic data"
            );
        }
        None => write_csv(io::stdout().lock(), &rows)?,
    }

    Ok(())
}
