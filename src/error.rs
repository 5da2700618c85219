use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunStatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unknown weighting mode: '{0}'")]
    InvalidMode(String),

    #[error("Cutoff ratio {0} is outside [0, 1]")]
    InvalidCutoff(f64),

    #[error("Max depth must be positive (got {0})")]
    InvalidDepth(usize),
}

pub type RsResult<T> = Result<T, RunStatsError>;
