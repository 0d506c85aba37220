// src/timeline/loader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::timeline::{ReleasePoint, Timeline};

// One row of the tab-separated dataset, before date parsing
#[derive(Debug, Deserialize)]
struct RawRow {
    release_date: String,
    percentage: f64,
    cumulative: f64,
}

fn parse_release_date(value: &str) -> Result<NaiveDate> {
    // the dataset's "%Y-%m" dates have no day component; pin it to the 1st
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").map_err(|source| {
        ChartError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

impl Timeline {
    /// Load a tab-separated dataset with `release_date` (`YYYY-MM`),
    /// `percentage`, and `cumulative` columns.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_tsv_reader(File::open(path)?)
    }

    pub fn from_tsv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);
        let mut points = Vec::new();
        for row in reader.deserialize() {
            let row: RawRow = row?;
            points.push(ReleasePoint {
                release_date: parse_release_date(&row.release_date)?,
                percentage: row.percentage,
                cumulative: row.cumulative,
            });
        }
        Timeline::new(points)
    }
}
