// CLI error types

use thiserror::Error;

use swaggregate_specs::SpecError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CliError::Spec(e) => format!("Aggregation failed: {}", e),
            CliError::Io(e) => format!("File operation failed: {}", e),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
