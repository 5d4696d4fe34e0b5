//! Summary statistics over Monte Carlo samples.

/// Arithmetic mean. Empty input returns `NaN`.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Quantile for sorted data via linear interpolation.
///
/// - `q=0` returns min
/// - `q=1` returns max
/// - empty input returns `NaN`
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let i = pos.floor() as usize;
    let j = pos.ceil() as usize;
    if i == j {
        return sorted[i];
    }
    let t = pos - i as f64;
    (1.0 - t) * sorted[i] + t * sorted[j]
}

/// Quantile via sorting + linear interpolation.
pub fn quantile(samples: &[f64], q: f64) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}

/// Fraction of samples strictly below `threshold`.
pub fn probability_below(samples: &[f64], threshold: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let count = samples.iter().filter(|&&x| x < threshold).count();
    count as f64 / samples.len() as f64
}

/// Mean of the samples strictly below `threshold`, or 0 when none are.
pub fn conditional_mean_below(samples: &[f64], threshold: f64) -> f64 {
    let (sum, count) = samples
        .iter()
        .filter(|&&x| x < threshold)
        .fold((0.0, 0usize), |(s, n), &x| (s + x, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
