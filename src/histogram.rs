//! Density histograms rendered as terminal bar charts.

use std::fmt::Write;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisFormat {
    Plain,
    Currency,
}

impl AxisFormat {
    /// `Currency` renders `-$12,345`; `Plain` keeps two decimals.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Plain => format!("{value:.2}"),
            Self::Currency => {
                let rounded = value.round();
                let sign = if rounded < 0.0 { "-" } else { "" };
                format!("{sign}${}", group_thousands(rounded.abs() as u64))
            }
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub density: f64,
}

#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub total: usize,
}

impl Histogram {
    /// Equal-width bins spanning the sample range. Densities integrate to 1.
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self> {
        let finite: Vec<f64> = samples.iter().copied().filter(|x| x.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return Err(Error::EmptySample);
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A constant sample still gets one bin of unit width.
        let width = if max > min {
            (max - min) / bins as f64
        } else {
            1.0
        };
        let bins = if max > min { bins } else { 1 };

        let mut counts = vec![0usize; bins];
        for &x in &finite {
            let idx = (((x - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = finite.len();
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count,
                density: count as f64 / (total as f64 * width),
            })
            .collect();

        Ok(Self { bins, total })
    }

    pub fn render(&self, title: &str, format: AxisFormat, width: usize) -> String {
        let peak = self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        let labels: Vec<String> = self
            .bins
            .iter()
            .map(|b| format!("{} .. {}", format.format_value(b.lower), format.format_value(b.upper)))
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "-".repeat(label_width + width + 3));
        for (bin, label) in self.bins.iter().zip(&labels) {
            let bar = bin.count * width / peak;
            let _ = writeln!(out, "{label:>label_width$} | {}", "#".repeat(bar));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_format() {
        assert_eq!(AxisFormat::Currency.format_value(1234567.4), "$1,234,567");
        assert_eq!(AxisFormat::Currency.format_value(-91600.0), "-$91,600");
        assert_eq!(AxisFormat::Currency.format_value(999.0), "$999");
        assert_eq!(AxisFormat::Plain.format_value(1.5), "1.50");
    }

    #[test]
    fn test_density_integrates_to_one() {
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64).sqrt()).collect();
        let hist = Histogram::from_samples(&samples, 20).unwrap();

        let area: f64 = hist.bins.iter().map(|b| b.density * (b.upper - b.lower)).sum();
        assert!((area - 1.0).abs() < 1e-9);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 1000);
        assert_eq!(hist.total, 1000);
    }

    #[test]
    fn test_constant_sample_single_bin() {
        let hist = Histogram::from_samples(&[3.0, 3.0, 3.0], 10).unwrap();
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert_eq!(Histogram::from_samples(&[], 10).unwrap_err(), Error::EmptySample);
        assert_eq!(Histogram::from_samples(&[f64::NAN], 10).unwrap_err(), Error::EmptySample);
    }

    #[test]
    fn test_render_has_one_line_per_bin() {
        let hist = Histogram::from_samples(&[0.0, 1.0, 1.0, 2.0], 2).unwrap();
        let text = hist.render("Income", AxisFormat::Currency, 10);

        assert!(text.starts_with("Income\n"));
        assert_eq!(text.lines().count(), 2 + hist.bins.len());
        assert!(text.contains("##########"));
    }
}
