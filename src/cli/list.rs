//! Card listing command.

use crate::cli::common::{to_json, CliContext, CliError, CliResult};
use crate::models::Campaign;
use crate::render::TextCards;
use crate::services::Filter;
use clap::Args;
use serde::Serialize;

/// List campaign cards, optionally filtered or searched
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Funding filter: all, funded or unfunded
    #[arg(short, long, value_name = "FILTER", default_value = "all")]
    pub filter: String,

    /// Case-insensitive name search over every campaign (overrides --filter).
    /// An empty query leaves the filtered view unchanged.
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    view: String,
    count: usize,
    campaigns: Vec<&'a Campaign>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let filter: Filter = self
            .filter
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;

        let mut board = ctx.load_board()?;
        let mut cards = TextCards::new();

        board.apply_filter(filter, &mut cards);
        if let Some(query) = &self.search {
            board.set_search_input(query.clone());
            board.submit_search(&mut cards);
        }

        if self.json {
            let campaigns = board.visible();
            let output = ListOutput {
                view: board.view().to_string(),
                count: campaigns.len(),
                campaigns,
            };
            println!("{}", to_json(&output)?);
        } else {
            println!("{} ({})", board.view(), cards.len());
            if !cards.is_empty() {
                println!();
                println!("{}", cards.to_text());
            }
        }

        Ok(())
    }
}
