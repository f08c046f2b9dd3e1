//! Command line: `serve` (HTTP server) and `sweep` (one retention pass).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tutor-server")]
#[command(about = "AI tutor chat backend: serve, sweep", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (config from env; bind overrides BIND_ADDR).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Delete stored turns older than the retention horizon, then exit.
    Sweep,
}
