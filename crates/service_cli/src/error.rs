//! CLI error types.

use replan_core::chain::ChainError;
use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Chain file is not valid JSON.
    #[error("Failed to parse chain file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Chain descriptors are structurally invalid.
    #[error("Invalid chain: {0}")]
    Chain(#[from] ChainError),

    /// Unsupported flag value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No schedule fits the requested budget.
    #[error("No feasible schedule fits within memory budget {budget}")]
    BudgetExceeded {
        /// The budget that proved too small.
        budget: u64,
    },
}
