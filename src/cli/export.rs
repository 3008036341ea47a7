//! Export command for generating the HTML page.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::export::{generate_page, PageOptions};
use crate::services::Filter;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export the campaign page as a standalone HTML file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output path for the HTML file
    #[arg(short, long, value_name = "FILE", default_value = "fundboard.html")]
    pub output: PathBuf,

    /// Funding filter for the card section: all, funded or unfunded
    #[arg(short, long, value_name = "FILTER", default_value = "all")]
    pub filter: String,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let filter: Filter = self
            .filter
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;

        let mut board = ctx.load_board()?;
        let mut sink = crate::render::HtmlCards::new();
        board.apply_filter(filter, &mut sink);

        let html = generate_page(&board, &PageOptions::standalone())
            .map_err(|e| CliError::io(format!("Failed to generate page: {e:#}")))?;

        fs::write(&self.output, html)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        tracing::info!(path = %self.output.display(), "exported page");
        println!("Exported to {}", self.output.display());
        Ok(())
    }
}
