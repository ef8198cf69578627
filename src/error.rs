use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid start time '{input}' (expected dd-mm-yyyy hh:mm): {source}")]
    StartTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Timestamp for reading {index} falls outside the supported calendar range")]
    TimestampOverflow { index: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
