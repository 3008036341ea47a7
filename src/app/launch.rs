use anyhow::{Context, Result};
use std::path::Path;

use crate::app::Board;
use crate::config::Config;
use crate::constants::TUI_LOG_FILE;
use crate::services::CatalogService;
use crate::{logging, tui};

/// Loads the campaigns and runs the terminal UI until the user quits.
///
/// Logging goes to a file next to the config so the alternate screen stays
/// clean; when the config directory is unavailable the UI runs unlogged.
pub fn launch_tui(data: Option<&Path>, config: Config, verbose: bool) -> Result<()> {
    match Config::config_dir() {
        Ok(dir) => logging::init_file(&dir.join(TUI_LOG_FILE), verbose)?,
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let source = CatalogService::resolve(data, &config);
    let campaigns = CatalogService::load_from(&source)
        .with_context(|| format!("Failed to load campaigns from {source}"))?;
    tracing::info!(%source, count = campaigns.len(), "starting terminal UI");

    let board = Board::new(campaigns).with_empty_query_shows_all(config.search.empty_query_shows_all);
    let mut app_state = tui::AppState::new(board, config, source.to_string());

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;

    result
}
