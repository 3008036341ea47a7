//! Shared CLI types: errors, exit codes, and the command context.

use std::fmt;
use std::path::PathBuf;

use crate::app::Board;
use crate::config::Config;
use crate::services::CatalogService;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input (unknown filter, invalid option value)
    ValidationError = 1,
    /// File could not be read, parsed, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error kinds a command can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid user input
    Validation,
    /// File system or parse failure
    Io,
}

/// Error returned by a command; carries its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// What went wrong
    pub kind: CliErrorKind,
    /// Message for stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Global options shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// `--data` override
    pub data: Option<PathBuf>,
}

impl CliContext {
    /// Loads the campaign collection and wraps it in a board configured
    /// from the context.
    pub fn load_board(&self) -> CliResult<Board> {
        let source = CatalogService::resolve(self.data.as_deref(), &self.config);
        tracing::debug!(%source, "loading campaigns");
        let campaigns = CatalogService::load_from(&source)
            .map_err(|e| CliError::io(format!("Failed to load campaigns: {e:#}")))?;
        Ok(Board::new(campaigns).with_empty_query_shows_all(self.config.search.empty_query_shows_all))
    }
}

/// Serializes a value as pretty JSON for stdout.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}
