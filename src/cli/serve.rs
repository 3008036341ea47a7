//! Local web server command.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::web;
use clap::Args;
use std::net::SocketAddr;

/// Serve the campaign page and JSON API over HTTP
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let addr: SocketAddr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid listen address: {e}")))?;

        let board = ctx.load_board()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        runtime
            .block_on(web::run_server(board, ctx.config.clone(), addr))
            .map_err(|e| CliError::io(format!("Web server failed: {e:#}")))
    }
}
