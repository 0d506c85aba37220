// src/stats/sample.rs

use rand::prelude::*;
use rand_distr::{Distribution, LogNormal, Normal};
use serde::{Deserialize, Serialize};

use crate::config::ChartSettings;
use crate::error::{ChartError, Result};
use crate::stats::summary::mean;

/// Build the generator the samplers draw from. A fixed seed makes every
/// downstream sequence reproducible.
pub fn settings_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `n` independent values from Normal(mean, std_dev).
pub fn sample_normal<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<f64>> {
    check_std_dev(std_dev)?;
    if n == 0 {
        return Ok(Vec::new());
    }
    if !mean.is_finite() {
        return Err(ChartError::invalid_parameter(
            "mean",
            format!("mean must be finite, got {}", mean),
        ));
    }
    let normal =
        Normal::new(mean, std_dev).map_err(|e| ChartError::invalid_parameter("std_dev", e.to_string()))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

/// Draw `n` independent values exp(Normal(ln(mean), std_dev)), so `mean` is
/// the median of the resulting distribution.
pub fn sample_log_normal<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<f64>> {
    check_std_dev(std_dev)?;
    if !mean.is_finite() || mean <= 0.0 {
        return Err(ChartError::invalid_parameter(
            "mean",
            format!("log-normal mean must be positive, got {}", mean),
        ));
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    let log_normal = LogNormal::new(mean.ln(), std_dev)
        .map_err(|e| ChartError::invalid_parameter("std_dev", e.to_string()))?;
    Ok((0..n).map(|_| log_normal.sample(rng)).collect())
}

fn check_std_dev(std_dev: f64) -> Result<()> {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(ChartError::invalid_parameter(
            "std_dev",
            format!("standard deviation must be positive, got {}", std_dev),
        ));
    }
    Ok(())
}

/// The two sequences the histogram pair is drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePair {
    pub log_normal: Vec<f64>,
    pub normal: Vec<f64>,
}

/// Draw the log-normal sequence at the target mean, then a normal sequence
/// centered on its empirical mean so the two charts line up.
pub fn sample_pair<R: Rng + ?Sized>(settings: &ChartSettings, rng: &mut R) -> Result<SamplePair> {
    let log_normal = sample_log_normal(
        rng,
        settings.sample_count,
        settings.target_mean,
        settings.log_normal_std_dev,
    )?;
    let normal = sample_normal(
        rng,
        settings.sample_count,
        mean(&log_normal),
        settings.normal_std_dev,
    )?;
    Ok(SamplePair { log_normal, normal })
}
