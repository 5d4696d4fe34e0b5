//! Profit Model
//!
//! Annual net income of a small shop from three uncertain inputs:
//! daily customers, spend per customer, and the share of sales taxed at
//! the standard VAT rate (the rest falls under the reduced rate).
//!
//! ## Income
//! - revenue = customers * spend * operating days
//! - VAT = revenue * (mix * standard + (1 - mix) * reduced)
//! - pre-tax = revenue - VAT - labor
//! - income tax applies to positive pre-tax profit only
//!
//! ## Monte Carlo
//! Each input is a percentile-fitted distribution. The summary reports the
//! mean income, the probability of a loss, and the mean loss given a loss.

use rand::Rng;
use rand_distr::Distribution;
use tracing::info;

use crate::error::Result;
use crate::percentile::{PercentileBounds, PercentileDistribution};
use crate::stats;

#[derive(Clone, Debug, PartialEq)]
pub struct ProfitModel {
    pub operating_days: f64,
    pub labor_cost: f64,
    pub standard_vat: f64,
    pub reduced_vat: f64,
    pub income_tax: f64,
}

impl Default for ProfitModel {
    fn default() -> Self {
        Self {
            operating_days: 360.0,
            labor_cost: 250_000.0,
            standard_vat: 0.25,
            reduced_vat: 0.12,
            income_tax: 0.22,
        }
    }
}

/// One draw of the model's random inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfitInputs {
    pub customers: f64,
    pub spend: f64,
    /// Percent of sales at the standard VAT rate.
    pub vat_mix_pct: f64,
}

impl ProfitModel {
    pub fn annual_revenue(&self, inputs: &ProfitInputs) -> f64 {
        inputs.customers * inputs.spend * self.operating_days
    }

    pub fn annual_vat(&self, inputs: &ProfitInputs) -> f64 {
        let mix = (inputs.vat_mix_pct / 100.0).clamp(0.0, 1.0);
        self.annual_revenue(inputs) * (mix * self.standard_vat + (1.0 - mix) * self.reduced_vat)
    }

    pub fn annual_net_income(&self, inputs: &ProfitInputs) -> f64 {
        let pre_tax = self.annual_revenue(inputs) - self.annual_vat(inputs) - self.labor_cost;
        if pre_tax > 0.0 {
            pre_tax * (1.0 - self.income_tax)
        } else {
            pre_tax
        }
    }
}

/// 90% intervals for the three inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioBounds {
    pub customers: PercentileBounds,
    pub spend: PercentileBounds,
    pub vat_mix_pct: PercentileBounds,
}

impl Default for ScenarioBounds {
    fn default() -> Self {
        Self {
            customers: PercentileBounds::ninety(10.0, 30.0),
            spend: PercentileBounds::ninety(25.0, 60.0),
            vat_mix_pct: PercentileBounds::ninety(5.0, 30.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfitScenario {
    pub customers: PercentileDistribution,
    pub spend: PercentileDistribution,
    pub vat_mix_pct: PercentileDistribution,
}

impl ProfitScenario {
    /// Customers and VAT mix are normal, spend is log-normal.
    pub fn new(bounds: &ScenarioBounds) -> Result<Self> {
        Ok(Self {
            customers: PercentileDistribution::normal(bounds.customers)?,
            spend: PercentileDistribution::log_normal(bounds.spend)?,
            vat_mix_pct: PercentileDistribution::normal(bounds.vat_mix_pct)?,
        })
    }

    /// Normal tails can go negative; counts and prices cannot.
    pub fn draw(&self, rng: &mut impl Rng) -> ProfitInputs {
        ProfitInputs {
            customers: self.customers.sample(rng).max(0.0),
            spend: self.spend.sample(rng).max(0.0),
            vat_mix_pct: self.vat_mix_pct.sample(rng),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfitSummary {
    pub runs: usize,
    pub incomes: Vec<f64>,
    pub mean: f64,
    pub loss_probability: f64,
    pub conditional_mean_loss: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

impl ProfitSummary {
    pub fn from_incomes(incomes: Vec<f64>) -> Self {
        let mut sorted = incomes.clone();
        sorted.sort_by(f64::total_cmp);

        Self {
            runs: incomes.len(),
            mean: stats::mean(&incomes),
            loss_probability: stats::probability_below(&incomes, 0.0),
            conditional_mean_loss: stats::conditional_mean_below(&incomes, 0.0),
            p5: stats::quantile_sorted(&sorted, 0.05),
            p50: stats::quantile_sorted(&sorted, 0.50),
            p95: stats::quantile_sorted(&sorted, 0.95),
            incomes,
        }
    }

    pub fn print(&self) {
        println!("  Runs:                    {}", self.runs);
        println!("  Mean net income:         ${:.0}", self.mean);
        println!("  Probability of loss:     {:.1}%", self.loss_probability * 100.0);
        println!("  Mean loss given loss:    ${:.0}", self.conditional_mean_loss);
        println!("  5th percentile:          ${:.0}", self.p5);
        println!("  Median:                  ${:.0}", self.p50);
        println!("  95th percentile:         ${:.0}", self.p95);
    }
}

pub fn simulate_profit(
    model: &ProfitModel,
    scenario: &ProfitScenario,
    runs: usize,
    rng: &mut impl Rng,
) -> ProfitSummary {
    let incomes: Vec<f64> = (0..runs)
        .map(|_| model.annual_net_income(&scenario.draw(rng)))
        .collect();

    let summary = ProfitSummary::from_incomes(incomes);
    info!(
        runs,
        mean = summary.mean,
        loss_probability = summary.loss_probability,
        "profit simulation complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_inputs() -> ProfitInputs {
        ProfitInputs {
            customers: 20.0,
            spend: 50.0,
            vat_mix_pct: 10.0,
        }
    }

    #[test]
    fn test_hand_computed_income() {
        let model = ProfitModel::default();
        let inputs = reference_inputs();

        assert!((model.annual_revenue(&inputs) - 360_000.0).abs() < 1e-6);
        // 360 000 * (0.1 * 0.25 + 0.9 * 0.12)
        assert!((model.annual_vat(&inputs) - 47_880.0).abs() < 1e-6);
        // (360 000 - 47 880 - 250 000) * 0.78
        assert!((model.annual_net_income(&inputs) - 48_453.6).abs() < 1e-6);
    }

    #[test]
    fn test_loss_is_untaxed() {
        let model = ProfitModel::default();
        let inputs = ProfitInputs {
            customers: 10.0,
            spend: 50.0,
            vat_mix_pct: 0.0,
        };

        // 180 000 - 21 600 - 250 000
        assert!((model.annual_net_income(&inputs) - (-91_600.0)).abs() < 1e-6);
    }

    #[test]
    fn test_simulation_summary() {
        let mut rng = StdRng::seed_from_u64(42);
        let model = ProfitModel::default();
        let scenario = ProfitScenario::new(&ScenarioBounds::default()).unwrap();
        let summary = simulate_profit(&model, &scenario, 20_000, &mut rng);

        assert_eq!(summary.runs, 20_000);
        assert_eq!(summary.incomes.len(), 20_000);
        assert!(summary.loss_probability > 0.0 && summary.loss_probability < 1.0);
        assert!(summary.conditional_mean_loss < 0.0);
        assert!(summary.conditional_mean_loss >= -model.labor_cost);
        assert!(summary.p5 <= summary.p50 && summary.p50 <= summary.p95);
    }

    #[test]
    fn test_scenario_rejects_bad_bounds() {
        let bounds = ScenarioBounds {
            spend: PercentileBounds::ninety(-5.0, 60.0),
            ..ScenarioBounds::default()
        };
        assert!(ProfitScenario::new(&bounds).is_err());
    }

    proptest! {
        #[test]
        fn prop_income_is_bit_identical(
            customers in 0.0f64..100.0,
            spend in 0.0f64..200.0,
            vat in 0.0f64..100.0,
        ) {
            let model = ProfitModel::default();
            let inputs = ProfitInputs { customers, spend, vat_mix_pct: vat };
            let first = model.annual_net_income(&inputs);
            let second = model.annual_net_income(&inputs);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn prop_more_customers_never_hurts(
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
            spend in 0.0f64..200.0,
            vat in 0.0f64..100.0,
        ) {
            let model = ProfitModel::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = model.annual_net_income(&ProfitInputs { customers: lo, spend, vat_mix_pct: vat });
            let high = model.annual_net_income(&ProfitInputs { customers: hi, spend, vat_mix_pct: vat });
            prop_assert!(low <= high + 1e-6);
        }

        #[test]
        fn prop_standard_vat_share_never_helps(
            customers in 0.0f64..100.0,
            spend in 0.0f64..200.0,
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let model = ProfitModel::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let cheap = model.annual_net_income(&ProfitInputs { customers, spend, vat_mix_pct: lo });
            let dear = model.annual_net_income(&ProfitInputs { customers, spend, vat_mix_pct: hi });
            prop_assert!(dear <= cheap + 1e-6);
        }
    }
}
