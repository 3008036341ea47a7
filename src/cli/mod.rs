//! CLI command handlers.
//!
//! Headless, scriptable access to the board for automation and testing.
//! Running the binary without a command opens the terminal UI instead.

pub mod common;
pub mod export;
pub mod list;
#[cfg(feature = "web")]
pub mod serve;
pub mod summary;
pub mod top;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use export::ExportArgs;
pub use list::ListArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
pub use summary::SummaryArgs;
pub use top::TopArgs;
