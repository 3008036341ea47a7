//! Sea Monster Crowdfunding board
//!
//! Loads a collection of crowdfunding campaigns and presents them as cards
//! with aggregate stats, funded/unfunded filters, name search and the two
//! top-funded highlights. The same board drives the terminal UI, the CLI
//! commands, the static HTML export and the optional web server.

// Module declarations
pub mod app;
pub mod assets;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod shortcuts;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
