// src/timeline/mod.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

pub mod loader;

/// One release record. Dates carry year and month only; the day is pinned to
/// the first of the month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReleasePoint {
    pub release_date: NaiveDate,
    pub percentage: f64,
    pub cumulative: f64,
}

/// A release history, strictly ascending by date. Built once per dataset load
/// and read-only afterwards; every lookup borrows from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    points: Vec<ReleasePoint>,
}

impl Timeline {
    /// Wrap an already-sorted record sequence. Out-of-order or duplicate
    /// dates fail with `UnsortedInput`; sortedness is checked here once so
    /// lookups never have to.
    pub fn new(points: Vec<ReleasePoint>) -> Result<Self> {
        for index in 1..points.len() {
            if points[index].release_date <= points[index - 1].release_date {
                return Err(ChartError::UnsortedInput { index });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ReleasePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last release date, for the x scale.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            self.points.first()?.release_date,
            self.points.last()?.release_date,
        ))
    }

    /// Smallest and largest cumulative fraction, for the y scale.
    pub fn cumulative_range(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|p| p.cumulative);
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((min, max))
    }

    /// The record closest to `query` by calendar distance, driving the
    /// hover readout. Binary search over the sorted dates; a query that is
    /// exactly equidistant from its two neighbors resolves to the later one.
    /// Queries before the first record return the first, past the last return
    /// the last. `None` only for an empty timeline.
    pub fn nearest(&self, query: NaiveDate) -> Option<&ReleasePoint> {
        if self.points.is_empty() {
            return None;
        }
        let insert = self
            .points
            .partition_point(|p| p.release_date < query)
            .max(1);
        if insert >= self.points.len() {
            return self.points.last();
        }
        let before = &self.points[insert - 1];
        let after = &self.points[insert];
        let to_before = (query - before.release_date).num_days();
        let to_after = (after.release_date - query).num_days();
        if to_after <= to_before {
            Some(after)
        } else {
            Some(before)
        }
    }
}
