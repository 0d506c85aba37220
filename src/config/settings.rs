// src/config/settings.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything the two charts are parameterized by. Defaults match the
/// published charts; a settings file overrides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSettings {
    pub sample_count: usize,
    pub target_mean: f64,
    pub log_normal_std_dev: f64,
    pub normal_std_dev: f64,
    pub bin_count: usize,
    pub domain_min: f64,
    pub domain_max: f64,
    pub seed: Option<u64>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            sample_count: 10_000,
            target_mean: 0.65,
            log_normal_std_dev: 0.5,
            normal_std_dev: 1.0,
            bin_count: 100,
            domain_min: 0.0,
            domain_max: 100.0,
            seed: None,
        }
    }
}

impl ChartSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
                .separate_tuple_members(true),
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
