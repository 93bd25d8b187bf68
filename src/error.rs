//! Error handling for the resume tailor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generation API unavailable: {0}")]
    ApiUnavailable(String),

    #[error("Generation API rate limited: {0}")]
    RateLimited(String),

    #[error("Malformed generation output: {0}")]
    MalformedOutput(String),
}

pub type Result<T> = std::result::Result<T, ResumeTailorError>;
