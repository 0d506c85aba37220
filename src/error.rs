// src/error.rs
use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("timeline is not sorted ascending by release date (record {index})")]
    UnsortedInput { index: usize },

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid release date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to parse settings file: {0}")]
    SettingsRead(#[from] ron::error::SpannedError),

    #[error("failed to write settings file: {0}")]
    SettingsWrite(#[from] ron::Error),
}

impl ChartError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
