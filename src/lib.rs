// src/lib.rs

//! Statistical backing data for chart rendering: random distribution samples,
//! fixed-domain histogram bins, timeline records with nearest-date lookup, and
//! the display strings that annotate them. Drawing is an external concern; a
//! presentation layer consumes what this crate produces.

pub mod config;
pub mod error;
pub mod format;
pub mod stats;
pub mod timeline;

pub use config::ChartSettings;
pub use error::{ChartError, Result};
pub use stats::{
    histogram, max_count, mean, normal_domain_coverage, sample_log_normal, sample_normal,
    sample_pair, settings_rng, Bin, DomainCoverage, SamplePair, Summary,
};
pub use timeline::{ReleasePoint, Timeline};
