// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Parsing failed: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Custom error: {0}")]
    Custom(String),
}
