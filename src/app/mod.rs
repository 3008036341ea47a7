//! Application orchestration layer
//!
//! The [`Board`] coordinates the campaign views; [`launch`] wires it to the
//! terminal UI.

pub mod board;

/// Terminal UI startup
pub mod launch;

pub use board::{Board, View};
pub use launch::launch_tui;
