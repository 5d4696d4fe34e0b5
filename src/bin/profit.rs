//! Profit Distribution Binary
//!
//! Monte Carlo over the shop's annual net income: mean, chance of a loss,
//! and how bad a loss is when it happens.
//!
//! ## Usage
//! ```bash
//! cargo run --bin profit --release
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use decision_simulation::histogram::{AxisFormat, Histogram};
use decision_simulation::logging::setup_logging;
use decision_simulation::profit::{simulate_profit, ProfitModel, ProfitScenario, ScenarioBounds};
use decision_simulation::Result;

#[derive(Parser)]
#[command(name = "profit")]
#[command(about = "Monte Carlo profit distribution of the shop model")]
struct Cli {
    /// Monte Carlo draws
    #[arg(short, long, default_value = "100000")]
    runs: usize,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Histogram bins
    #[arg(short, long, default_value = "25")]
    bins: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let model = ProfitModel::default();
    let bounds = ScenarioBounds::default();
    let scenario = ProfitScenario::new(&bounds)?;

    println!("=======================================================");
    println!("  Shop Profit Model");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Operating days:          {}", model.operating_days);
    println!("  Labor cost:              ${:.0}", model.labor_cost);
    println!(
        "  VAT standard / reduced:  {:.0}% / {:.0}%",
        model.standard_vat * 100.0,
        model.reduced_vat * 100.0
    );
    println!("  Income tax:              {:.0}%", model.income_tax * 100.0);
    println!(
        "  Customers/day (90%):     {} - {}",
        bounds.customers.lower, bounds.customers.upper
    );
    println!(
        "  Spend/customer (90%):    ${} - ${}",
        bounds.spend.lower, bounds.spend.upper
    );
    println!(
        "  Standard VAT share (90%): {}% - {}%",
        bounds.vat_mix_pct.lower, bounds.vat_mix_pct.upper
    );
    println!();

    let summary = simulate_profit(&model, &scenario, cli.runs, &mut rng);
    println!("Results");
    println!("{}", "-".repeat(50));
    summary.print();
    println!();

    let histogram = Histogram::from_samples(&summary.incomes, cli.bins)?;
    print!(
        "{}",
        histogram.render("Annual net income", AxisFormat::Currency, 50)
    );

    Ok(())
}
