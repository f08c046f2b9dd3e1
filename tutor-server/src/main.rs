//! Binary for the tutor server.

use anyhow::Result;
use clap::Parser;
use tutor_server::{init_tracing, run_server, run_sweep, Cli, Commands, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::load()?;
    init_tracing(&config.log_file)?;

    match cli.command {
        Commands::Serve { bind } => run_server(config, bind).await,
        Commands::Sweep => run_sweep(config).await,
    }
}
