//! Value of Information Simulation
//!
//! A coin-flip wager pays `win` on heads and costs `lose` on tails. Before
//! the flip, a seller quotes a price for revealing the outcome. Each agent
//! has a maximum price it is willing to pay:
//! 1. Quote <= max price -> buy, play only if the reveal is heads
//! 2. Otherwise -> take the default (uninformed) action
//!
//! Averaged over many repetitions with quotes spread over the agents'
//! range, the agent earning the most is the one whose maximum price equals
//! the wager's expected opportunity loss.

use rand::Rng;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Play,
    Decline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoinFlipWager {
    pub win: f64,
    pub lose: f64,
    pub heads_probability: f64,
}

impl CoinFlipWager {
    pub fn fair(win: f64, lose: f64) -> Self {
        Self {
            win,
            lose,
            heads_probability: 0.5,
        }
    }

    pub fn expected_value(&self) -> f64 {
        self.heads_probability * self.win - (1.0 - self.heads_probability) * self.lose
    }

    /// Uninformed choice. For a fair coin: play iff win > lose.
    pub fn default_action(&self) -> Action {
        if self.expected_value() > 0.0 {
            Action::Play
        } else {
            Action::Decline
        }
    }

    pub fn payoff(&self, action: Action, heads: bool) -> f64 {
        match (action, heads) {
            (Action::Decline, _) => 0.0,
            (Action::Play, true) => self.win,
            (Action::Play, false) => -self.lose,
        }
    }

    /// Expected reward forgone by the default action when it turns out wrong.
    pub fn expected_opportunity_loss(&self) -> f64 {
        match self.default_action() {
            Action::Play => (1.0 - self.heads_probability) * self.lose,
            Action::Decline => self.heads_probability * self.win,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub max_price: u32,
}

impl Agent {
    pub fn new(max_price: u32) -> Self {
        Self { max_price }
    }

    pub fn buys(&self, quoted_price: f64) -> bool {
        f64::from(self.max_price) >= quoted_price
    }

    pub fn action(&self, wager: &CoinFlipWager, heads: bool, quoted_price: f64) -> Action {
        if self.buys(quoted_price) {
            if heads {
                Action::Play
            } else {
                Action::Decline
            }
        } else {
            wager.default_action()
        }
    }

    /// Play outcome minus information cost.
    pub fn profit(&self, wager: &CoinFlipWager, heads: bool, quoted_price: f64) -> f64 {
        let outcome = wager.payoff(self.action(wager, heads, quoted_price), heads);
        let cost = if self.buys(quoted_price) {
            quoted_price
        } else {
            0.0
        };
        outcome - cost
    }
}

#[derive(Clone, Debug)]
pub struct VoiConfig {
    pub wager: CoinFlipWager,
    /// Agents span `0..=max_threshold`; quotes are uniform over the same range.
    pub max_threshold: u32,
    pub repetitions: usize,
}

impl Default for VoiConfig {
    fn default() -> Self {
        Self {
            wager: CoinFlipWager::fair(200.0, 100.0),
            max_threshold: 100,
            repetitions: 100_000,
        }
    }
}

impl VoiConfig {
    pub fn agents(&self) -> Vec<Agent> {
        (0..=self.max_threshold).map(Agent::new).collect()
    }
}

#[derive(Debug, Clone)]
pub struct VoiOutcome {
    pub wager: CoinFlipWager,
    pub repetitions: usize,
    /// Indexed by the agent's maximum price.
    pub mean_profit_by_threshold: Vec<f64>,
    pub best_threshold: u32,
    pub best_mean_profit: f64,
    pub expected_opportunity_loss: f64,
}

impl VoiOutcome {
    pub fn print(&self) {
        println!("  Repetitions:             {}", self.repetitions);
        println!(
            "  Default action:          {:?}",
            self.wager.default_action()
        );
        println!(
            "  Expected opport. loss:   ${:.2}",
            self.expected_opportunity_loss
        );
        println!("  Best threshold:          ${}", self.best_threshold);
        println!("  Best mean profit:        ${:.2}", self.best_mean_profit);
    }
}

pub fn run_voi_simulation(config: &VoiConfig, rng: &mut impl Rng) -> VoiOutcome {
    let agents = config.agents();
    let wager = config.wager;
    let mut totals = vec![0.0; agents.len()];

    for _ in 0..config.repetitions {
        let heads = rng.gen_bool(wager.heads_probability);
        let quoted_price = rng.gen_range(0.0..=f64::from(config.max_threshold));

        for (total, agent) in totals.iter_mut().zip(agents.iter()) {
            *total += agent.profit(&wager, heads, quoted_price);
        }
    }

    let n = config.repetitions.max(1) as f64;
    let mean_profit_by_threshold: Vec<f64> = totals.iter().map(|t| t / n).collect();

    let (best_idx, best_mean_profit) = mean_profit_by_threshold
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, m)| {
            if m > best.1 {
                (i, m)
            } else {
                best
            }
        });
    let best_threshold = agents[best_idx].max_price;
    let expected_opportunity_loss = wager.expected_opportunity_loss();

    debug!(agents = agents.len(), "aggregated agent profits");
    info!(
        win = wager.win,
        lose = wager.lose,
        best_threshold,
        expected_opportunity_loss,
        "value of information simulation complete"
    );

    VoiOutcome {
        wager,
        repetitions: config.repetitions,
        mean_profit_by_threshold,
        best_threshold,
        best_mean_profit,
        expected_opportunity_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_action() {
        assert_eq!(CoinFlipWager::fair(200.0, 100.0).default_action(), Action::Play);
        assert_eq!(CoinFlipWager::fair(50.0, 1000.0).default_action(), Action::Decline);
        assert_eq!(CoinFlipWager::fair(100.0, 100.0).default_action(), Action::Decline);
    }

    #[test]
    fn test_expected_opportunity_loss() {
        assert!((CoinFlipWager::fair(200.0, 100.0).expected_opportunity_loss() - 50.0).abs() < 1e-12);
        assert!((CoinFlipWager::fair(50.0, 1000.0).expected_opportunity_loss() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_agent_profit() {
        let wager = CoinFlipWager::fair(200.0, 100.0);
        let buyer = Agent::new(60);
        let holdout = Agent::new(10);

        // Informed: skip the losing flip but pay for it.
        assert_eq!(buyer.profit(&wager, false, 30.0), -30.0);
        assert_eq!(buyer.profit(&wager, true, 30.0), 170.0);
        // Uninformed: default is to play.
        assert_eq!(holdout.profit(&wager, false, 30.0), -100.0);
        assert_eq!(holdout.profit(&wager, true, 30.0), 200.0);
        // Threshold equal to the quote still buys.
        assert!(Agent::new(30).buys(30.0));
    }

    #[test]
    fn test_declining_default_agent_profit() {
        let wager = CoinFlipWager::fair(50.0, 1000.0);

        assert_eq!(Agent::new(0).profit(&wager, true, 5.0), 0.0);
        assert_eq!(Agent::new(20).profit(&wager, true, 5.0), 45.0);
        assert_eq!(Agent::new(20).profit(&wager, false, 5.0), -5.0);
    }

    #[test]
    fn test_best_threshold_matches_loss_when_defaulting_to_play() {
        let mut rng = StdRng::seed_from_u64(2024);
        let config = VoiConfig {
            wager: CoinFlipWager::fair(200.0, 100.0),
            max_threshold: 100,
            repetitions: 200_000,
        };
        let outcome = run_voi_simulation(&config, &mut rng);

        assert_eq!(outcome.mean_profit_by_threshold.len(), 101);
        assert_eq!(outcome.expected_opportunity_loss, 50.0);
        assert!(
            (i64::from(outcome.best_threshold) - 50).abs() <= 6,
            "best threshold {}",
            outcome.best_threshold
        );
    }

    #[test]
    fn test_best_threshold_matches_loss_when_defaulting_to_decline() {
        let mut rng = StdRng::seed_from_u64(99);
        let config = VoiConfig {
            wager: CoinFlipWager::fair(50.0, 1000.0),
            max_threshold: 50,
            repetitions: 200_000,
        };
        let outcome = run_voi_simulation(&config, &mut rng);

        assert_eq!(outcome.expected_opportunity_loss, 25.0);
        assert!(
            (i64::from(outcome.best_threshold) - 25).abs() <= 4,
            "best threshold {}",
            outcome.best_threshold
        );
    }

    #[test]
    fn test_zero_threshold_earns_default_value() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = VoiConfig {
            wager: CoinFlipWager::fair(200.0, 100.0),
            max_threshold: 100,
            repetitions: 50_000,
        };
        let outcome = run_voi_simulation(&config, &mut rng);

        // Never buys, so earns the wager's expected value of 50.
        assert!((outcome.mean_profit_by_threshold[0] - 50.0).abs() < 3.0);
    }
}
