//! CLI error types.

use kanbancal_core::calendar::TimeOfDayError;
use kanbancal_core::store::StoreError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Time(#[from] TimeOfDayError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
