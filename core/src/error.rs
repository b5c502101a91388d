//! Error types for parsing, validation and configuration.

use thiserror::Error;

/// Failures of the record → summary pipeline.
///
/// Every variant is a deterministic function of the input; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("malformed record {record:?}: expected 2 or 3 comma-separated fields, got {fields}")]
    MalformedInput { record: String, fields: usize },

    #[error("invalid step count {0:?}: expected a positive integer")]
    InvalidSteps(String),

    #[error("invalid duration {0:?}: expected a positive <hours>h<minutes>m")]
    InvalidDuration(String),

    #[error("invalid biometrics: {0}")]
    InvalidBiometrics(String),

    #[error("unsupported activity {0:?}")]
    UnsupportedActivity(String),
}

/// Failures when loading or saving a [`crate::CalcConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path} at `{field}`: {message}")]
    Parse {
        path: String,
        field: String,
        message: String,
    },

    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type TrainingResult<T> = Result<T, TrainingError>;
