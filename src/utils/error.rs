use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Channel resolution failed for '{url}': {reason}")]
    ResolutionError { url: String, reason: String },

    #[error("Sentiment scoring failed: {message}")]
    ScoringError { message: String },
}

pub type Result<T> = std::result::Result<T, PulseError>;
