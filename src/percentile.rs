//! Percentile-Parametrized Distributions
//!
//! Builds a normal or log-normal distribution from two stated quantiles
//! instead of a mean and variance. The common case is a 90% interval:
//! "I'm 90% sure the value is between 10 and 90".
//!
//! ## Fit
//! With `z = Φ⁻¹(p)` for each stated percentile:
//! - `sigma = (x2 - x1) / (z2 - z1)`
//! - `mu = x1 - sigma * z1`
//!
//! The log-normal fit applies the same formulas to `ln(x)`.

use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};
use statrs::distribution::{ContinuousCDF, Normal as StandardNormal};
use tracing::debug;

use crate::error::{Error, Result};

pub const LOWER_P: f64 = 0.05;
pub const UPPER_P: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistributionKind {
    Normal,
    LogNormal,
}

impl DistributionKind {
    pub fn all() -> Vec<Self> {
        vec![Self::Normal, Self::LogNormal]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::LogNormal => "Log-normal",
        }
    }
}

/// Two stated quantiles: `P(X <= lower) = lower_p`, `P(X <= upper) = upper_p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentileBounds {
    pub lower: f64,
    pub upper: f64,
    pub lower_p: f64,
    pub upper_p: f64,
}

impl PercentileBounds {
    pub fn new(lower: f64, upper: f64, lower_p: f64, upper_p: f64) -> Self {
        Self {
            lower,
            upper,
            lower_p,
            upper_p,
        }
    }

    /// 90% interval: 5th and 95th percentile.
    pub fn ninety(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, LOWER_P, UPPER_P)
    }

    fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(Error::NonFinite("percentile bound"));
        }
        if !self.lower_p.is_finite() || !self.upper_p.is_finite() {
            return Err(Error::NonFinite("percentile probability"));
        }
        if self.lower >= self.upper {
            return Err(Error::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        for p in [self.lower_p, self.upper_p] {
            if !(p > 0.0 && p < 1.0) {
                return Err(Error::InvalidProbability(format!(
                    "percentile must be in (0,1), got {p}"
                )));
            }
        }
        if self.lower_p >= self.upper_p {
            return Err(Error::InvalidProbability(format!(
                "lower percentile {} must be below upper percentile {}",
                self.lower_p, self.upper_p
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum Sampler {
    Normal(Normal<f64>),
    LogNormal(LogNormal<f64>),
}

/// Distribution fitted to a pair of percentiles.
#[derive(Clone, Copy, Debug)]
pub struct PercentileDistribution {
    pub kind: DistributionKind,
    /// Mean of the normal (of `ln X` for log-normal).
    pub location: f64,
    /// Standard deviation of the normal (of `ln X` for log-normal).
    pub scale: f64,
    sampler: Sampler,
}

fn inv_norm_cdf(p: f64) -> Result<f64> {
    let standard =
        StandardNormal::new(0.0, 1.0).map_err(|e| Error::Distribution(e.to_string()))?;
    Ok(standard.inverse_cdf(p))
}

/// Location and scale of the normal whose `p1`/`p2` quantiles are `x1`/`x2`.
fn fit_normal(x1: f64, x2: f64, p1: f64, p2: f64) -> Result<(f64, f64)> {
    let z1 = inv_norm_cdf(p1)?;
    let z2 = inv_norm_cdf(p2)?;
    let scale = (x2 - x1) / (z2 - z1);
    let location = x1 - scale * z1;
    Ok((location, scale))
}

impl PercentileDistribution {
    pub fn normal(bounds: PercentileBounds) -> Result<Self> {
        bounds.validate()?;
        let (location, scale) =
            fit_normal(bounds.lower, bounds.upper, bounds.lower_p, bounds.upper_p)?;
        let normal = Normal::new(location, scale).map_err(|e| Error::Distribution(e.to_string()))?;

        debug!(location, scale, "fitted normal to percentiles");
        Ok(Self {
            kind: DistributionKind::Normal,
            location,
            scale,
            sampler: Sampler::Normal(normal),
        })
    }

    pub fn log_normal(bounds: PercentileBounds) -> Result<Self> {
        bounds.validate()?;
        if bounds.lower <= 0.0 {
            return Err(Error::NonPositiveBound(bounds.lower));
        }
        let (location, scale) = fit_normal(
            bounds.lower.ln(),
            bounds.upper.ln(),
            bounds.lower_p,
            bounds.upper_p,
        )?;
        let log_normal =
            LogNormal::new(location, scale).map_err(|e| Error::Distribution(e.to_string()))?;

        debug!(location, scale, "fitted log-normal to percentiles");
        Ok(Self {
            kind: DistributionKind::LogNormal,
            location,
            scale,
            sampler: Sampler::LogNormal(log_normal),
        })
    }

    pub fn from_bounds(kind: DistributionKind, bounds: PercentileBounds) -> Result<Self> {
        match kind {
            DistributionKind::Normal => Self::normal(bounds),
            DistributionKind::LogNormal => Self::log_normal(bounds),
        }
    }

    /// Analytic quantile of the fitted distribution.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidProbability(format!(
                "quantile must be in (0,1), got {p}"
            )));
        }
        let x = self.location + self.scale * inv_norm_cdf(p)?;
        Ok(match self.kind {
            DistributionKind::Normal => x,
            DistributionKind::LogNormal => x.exp(),
        })
    }

    /// `n` independent draws.
    pub fn sample_n(&self, n: usize, rng: &mut impl Rng) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

impl Distribution<f64> for PercentileDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.sampler {
            Sampler::Normal(d) => d.sample(rng),
            Sampler::LogNormal(d) => d.sample(rng),
        }
    }
}
