//! Sea Monster Crowdfunding - campaign board for the terminal
//!
//! Runs the terminal UI when no command is given; subcommands provide
//! scriptable access for automation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fundboard::app;
use fundboard::cli::{CliContext, CliError, ExportArgs, ListArgs, SummaryArgs, TopArgs};
#[cfg(feature = "web")]
use fundboard::cli::ServeArgs;
use fundboard::config::Config;
use fundboard::logging;

/// Sea Monster Crowdfunding - browse and fund games from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Campaign data file (JSON array); defaults to the config or bundled data
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print contribution totals and the description blurb
    Summary(SummaryArgs),
    /// Print campaign cards, optionally filtered or searched
    List(ListArgs),
    /// Print the highest-pledged campaigns
    Top(TopArgs),
    /// Write the campaign page as a standalone HTML file
    Export(ExportArgs),
    /// Serve the campaign page and JSON API over HTTP
    #[cfg(feature = "web")]
    Serve(ServeArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: &Commands, ctx: &CliContext) -> Result<(), CliError> {
    match command {
        Commands::Summary(args) => args.execute(ctx),
        Commands::List(args) => args.execute(ctx),
        Commands::Top(args) => args.execute(ctx),
        Commands::Export(args) => args.execute(ctx),
        #[cfg(feature = "web")]
        Commands::Serve(args) => args.execute(ctx),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        let config = load_config(cli.config.as_ref())?;
        return app::launch_tui(cli.data.as_deref(), config, cli.verbose);
    };

    logging::init_stderr(cli.verbose);

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let error = CliError::validation(format!("Invalid configuration: {e:#}"));
            eprintln!("Error: {error}");
            std::process::exit(error.exit_code().code());
        }
    };

    let ctx = CliContext {
        config,
        data: cli.data.clone(),
    };

    if let Err(error) = run_command(command, &ctx) {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }

    Ok(())
}
