use thiserror::Error;

/// Custom error types for staymap
#[derive(Debug, Clone, Error)]
pub enum StaymapError {
    #[error("Invalid property dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StaymapError {
    fn from(err: std::io::Error) -> Self {
        StaymapError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
