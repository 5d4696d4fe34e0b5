//! Percentile Fit Binary
//!
//! Fits normal and log-normal distributions to 90% intervals and checks
//! the empirical 5th/95th percentiles of the draws.
//!
//! ## Usage
//! ```bash
//! cargo run --bin percentiles --release
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use decision_simulation::histogram::{AxisFormat, Histogram};
use decision_simulation::logging::setup_logging;
use decision_simulation::percentile::{
    DistributionKind, PercentileBounds, PercentileDistribution, LOWER_P, UPPER_P,
};
use decision_simulation::stats::quantile;
use decision_simulation::Result;

const INTERVALS: [(f64, f64); 3] = [(10.0, 90.0), (1.0, 100.0), (25.0, 60.0)];

#[derive(Parser)]
#[command(name = "percentiles")]
#[command(about = "Fit distributions to 90% intervals and verify them by sampling")]
struct Cli {
    /// Draws per distribution
    #[arg(short, long, default_value = "100000")]
    runs: usize,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Print a histogram of each fit
    #[arg(long)]
    histogram: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    println!("=======================================================");
    println!("  Percentile-Parametrized Distributions");
    println!("  Draws per fit: {}", cli.runs);
    println!("=======================================================");
    println!();
    println!("| Kind       | Bounds        | mu      | sigma   | Empirical 5%  | Empirical 95% |");
    println!("|------------|---------------|---------|---------|---------------|---------------|");

    for kind in DistributionKind::all() {
        for (lower, upper) in INTERVALS {
            let dist = PercentileDistribution::from_bounds(kind, PercentileBounds::ninety(lower, upper))?;
            let draws = dist.sample_n(cli.runs, &mut rng);

            println!(
                "| {:10} | {:5} - {:5} | {:7.3} | {:7.3} | {:13.2} | {:13.2} |",
                kind.name(),
                lower,
                upper,
                dist.location,
                dist.scale,
                quantile(&draws, LOWER_P),
                quantile(&draws, UPPER_P),
            );

            if cli.histogram {
                let title = format!("{} fit to {lower} - {upper}", kind.name());
                println!();
                print!(
                    "{}",
                    Histogram::from_samples(&draws, 20)?.render(&title, AxisFormat::Plain, 40)
                );
                println!();
            }
        }
    }

    Ok(())
}
