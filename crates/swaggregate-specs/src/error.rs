//! Error types for spec aggregation

use std::io;

use thiserror::Error;

/// Errors that can occur while aggregating spec documents
#[derive(Debug, Error)]
pub enum SpecError {
    /// Invalid spec format
    #[error("Invalid spec format: {0}")]
    InvalidFormat(String),

    /// Parse error with location information
    #[error("Parse error at {path}:{line}: {message}")]
    ParseError {
        /// File path where the error occurred
        path: String,
        /// Line number where the error occurred
        line: usize,
        /// Error message
        message: String,
    },

    /// Circular include detected
    #[error("Circular include detected: {chain:?}")]
    CircularInclude {
        /// Document paths on the include chain, root first
        chain: Vec<String>,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
