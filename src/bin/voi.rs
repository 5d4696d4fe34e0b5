//! Value of Information Simulation Binary
//!
//! Finds the willingness-to-pay that maximizes mean profit for two coin-flip
//! wagers and compares it with the analytic expected opportunity loss.
//!
//! ## Usage
//! ```bash
//! cargo run --bin voi --release -- --runs 200000 --seed 7
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use decision_simulation::logging::setup_logging;
use decision_simulation::voi::{run_voi_simulation, CoinFlipWager, VoiConfig, VoiOutcome};

#[derive(Parser)]
#[command(name = "voi")]
#[command(about = "Value of information: best willingness-to-pay vs expected opportunity loss")]
struct Cli {
    /// Coin flips per wager
    #[arg(short, long, default_value = "100000")]
    runs: usize,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    println!("=======================================================");
    println!("  Value of Information");
    println!("  How much should you pay to know the flip?");
    println!("=======================================================");
    println!();

    let configs = [
        VoiConfig {
            wager: CoinFlipWager::fair(200.0, 100.0),
            max_threshold: 100,
            repetitions: cli.runs,
        },
        VoiConfig {
            wager: CoinFlipWager::fair(50.0, 1000.0),
            max_threshold: 50,
            repetitions: cli.runs,
        },
    ];

    for config in &configs {
        println!(
            "Wager: win ${:.0} on heads, lose ${:.0} on tails",
            config.wager.win, config.wager.lose
        );
        println!("{}", "-".repeat(50));

        let outcome = run_voi_simulation(config, &mut rng);
        outcome.print();
        println!();
        print_profit_table(&outcome, 5);
        println!();
    }
}

fn print_profit_table(outcome: &VoiOutcome, step: usize) {
    println!("| Max price | Mean profit |");
    println!("|-----------|-------------|");

    for (threshold, profit) in outcome
        .mean_profit_by_threshold
        .iter()
        .enumerate()
        .step_by(step)
    {
        let marker = if threshold as u32 == outcome.best_threshold {
            " <"
        } else {
            ""
        };
        println!("| ${:8} | ${:10.2} |{}", threshold, profit, marker);
    }
}
