//! Summary statistics command.

use crate::cli::common::{to_json, CliContext, CliResult};
use crate::services::{format_dollars, format_thousands, Summary};
use clap::Args;
use serde::Serialize;

/// Show total contributions, amount raised and game count
#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SummaryOutput {
    #[serde(flatten)]
    summary: Summary,
    blurb: String,
}

impl SummaryArgs {
    /// Execute the summary command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let board = ctx.load_board()?;
        let summary = board.summary();

        if self.json {
            let output = SummaryOutput {
                summary,
                blurb: summary.blurb(),
            };
            println!("{}", to_json(&output)?);
        } else {
            println!("Individual Contributions: {}", format_thousands(summary.total_backers));
            println!("Total Raised:             {}", format_dollars(summary.total_pledged));
            println!("Total Games:              {}", format_thousands(summary.count as u64));
            println!();
            println!("{}", summary.blurb());
        }

        Ok(())
    }
}
