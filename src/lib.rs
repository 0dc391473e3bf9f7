pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::{
    dedup::{DeDup, DedupMethod, DedupReport},
    sample::SAMPLE_INTEGERS,
};

use thiserror::Error;

/// Main error type for dedupe operations
#[derive(Error, Debug)]
pub enum DedupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DedupError>;

impl From<serde_json::Error> for DedupError {
    fn from(err: serde_json::Error) -> Self {
        DedupError::Parse(err.to_string())
    }
}

impl From<anyhow::Error> for DedupError {
    fn from(err: anyhow::Error) -> Self {
        DedupError::Other(err.to_string())
    }
}
