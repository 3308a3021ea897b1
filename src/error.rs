//! Error handling for the portfolio mapper

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioMapperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, PortfolioMapperError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for PortfolioMapperError {
    fn from(err: anyhow::Error) -> Self {
        PortfolioMapperError::Mapping(err.to_string())
    }
}
