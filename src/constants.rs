//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Sea Monster Crowdfunding";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "Fundboard";

/// Log file written while the terminal UI owns the screen.
pub const TUI_LOG_FILE: &str = "fundboard.log";
