use thiserror::Error;

pub type CreativeResult<T> = Result<T, CreativeError>;

#[derive(Error, Debug)]
pub enum CreativeError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Configuration Error: {0}")]
    Validation(String),

    #[error("Error: Creatives file not found: {0}")]
    FileNotFound(String),

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid creative entry: {0}")]
    InvalidEntry(String),

    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Ad publishing error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for CreativeError {
    fn from(err: config::ConfigError) -> Self {
        CreativeError::Config(err.to_string())
    }
}
