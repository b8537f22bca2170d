//! Shared error and exit-code types for CLI commands.

use crate::config::SwapError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Command failed (missing file, bad JSON, missing fields, I/O)
    Failure = 1,
}

impl ExitCode {
    /// Numeric process status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command before exiting.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Input was missing or malformed.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Failure,
        }
    }

    /// Reading or writing a file failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Failure,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SwapError> for CliError {
    fn from(err: SwapError) -> Self {
        match err {
            SwapError::Io(_) | SwapError::Serialize(_) => Self::io(err.to_string()),
            SwapError::NotFound(_) | SwapError::Parse(_) | SwapError::MissingField(_) => {
                Self::validation(err.to_string())
            }
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
