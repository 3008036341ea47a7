//! Top-funded campaigns command.

use crate::cli::common::{to_json, CliContext, CliError, CliResult};
use crate::config::MAX_TOP_COUNT;
use crate::models::Campaign;
use crate::services::format_dollars;
use clap::Args;
use serde::Serialize;

/// Show the highest-pledged campaigns
#[derive(Debug, Clone, Args)]
pub struct TopArgs {
    /// How many campaigns to show (defaults to display.top_count, normally 2)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RankedCampaign<'a> {
    rank: usize,
    #[serde(flatten)]
    campaign: &'a Campaign,
}

impl TopArgs {
    /// Execute the top command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let count = self.count.unwrap_or(ctx.config.display.top_count);
        if count == 0 || count > MAX_TOP_COUNT {
            return Err(CliError::validation(format!(
                "Count must be between 1 and {MAX_TOP_COUNT}, got {count}"
            )));
        }

        let board = ctx.load_board()?;
        let ranked: Vec<RankedCampaign> = board
            .top(count)
            .into_iter()
            .enumerate()
            .map(|(i, campaign)| RankedCampaign {
                rank: i + 1,
                campaign,
            })
            .collect();

        if self.json {
            println!("{}", to_json(&ranked)?);
        } else {
            for entry in &ranked {
                println!(
                    "{}. {} ({})",
                    entry.rank,
                    entry.campaign.name,
                    format_dollars(entry.campaign.pledged)
                );
            }
        }

        Ok(())
    }
}
