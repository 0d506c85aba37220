// src/stats/summary.rs

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{ChartError, Result};

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// The annotation block drawn next to a histogram.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                count: 0,
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                std_dev: f64::NAN,
            };
        }

        let mean = mean(samples);
        // Sample variance (n - 1)
        let variance = if samples.len() > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64
        } else {
            0.0
        };

        Self {
            count: samples.len(),
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// How much of a fitted Normal(mean, std_dev) falls below, within, and above
/// the chart's fixed domain. The binner drops out-of-domain samples, so this
/// is the share of the distribution the chart actually shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DomainCoverage {
    pub below: f64,
    pub within: f64,
    pub above: f64,
}

pub fn normal_domain_coverage(
    mean: f64,
    std_dev: f64,
    domain_min: f64,
    domain_max: f64,
) -> Result<DomainCoverage> {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(ChartError::invalid_parameter(
            "std_dev",
            format!("standard deviation must be positive, got {}", std_dev),
        ));
    }
    if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
        return Err(ChartError::invalid_parameter(
            "domain",
            format!(
                "domain bounds must be finite with min < max, got [{}, {}]",
                domain_min, domain_max
            ),
        ));
    }

    let normal =
        Normal::new(mean, std_dev).map_err(|e| ChartError::invalid_parameter("mean", e.to_string()))?;
    let below = normal.cdf(domain_min);
    let above = 1.0 - normal.cdf(domain_max);
    Ok(DomainCoverage {
        below,
        within: (1.0 - below - above).max(0.0),
        above,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_samples() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_slice_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn summary_of_known_samples() {
        let samples: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let summary = Summary::from_samples(&samples);
        assert_eq!(summary.count, 10);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 10.0);
        assert!((summary.mean - 5.5).abs() < 1e-12);
        // variance = 82.5 / 9
        assert!((summary.std_dev - (82.5f64 / 9.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_slice_is_nan() {
        let summary = Summary::from_samples(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.std_dev.is_nan());
    }

    #[test]
    fn summary_of_single_sample() {
        let summary = Summary::from_samples(&[2.5]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 2.5);
        assert_eq!(summary.max, 2.5);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn coverage_of_symmetric_domain_splits_tails_evenly() {
        let coverage = normal_domain_coverage(50.0, 10.0, 30.0, 70.0).unwrap();
        assert!((coverage.below - coverage.above).abs() < 1e-12);
        assert!((coverage.below + coverage.within + coverage.above - 1.0).abs() < 1e-12);
        // two sigma either side keeps ~95% in view
        assert!(coverage.within > 0.95 && coverage.within < 0.96);
    }

    #[test]
    fn coverage_fractions_stay_in_unit_range() {
        let coverage = normal_domain_coverage(0.65, 1.0, 0.0, 100.0).unwrap();
        for f in [coverage.below, coverage.within, coverage.above] {
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn coverage_rejects_bad_parameters() {
        assert!(matches!(
            normal_domain_coverage(0.0, 0.0, 0.0, 1.0),
            Err(ChartError::InvalidParameter { .. })
        ));
        assert!(matches!(
            normal_domain_coverage(0.0, 1.0, 1.0, 1.0),
            Err(ChartError::InvalidParameter { .. })
        ));
    }
}
