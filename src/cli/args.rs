//! CLI argument definitions using clap
//!
//! Commands:
//! - airplane-registry init-db [--config <path>]
//! - airplane-registry serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Airplane registry - records airplanes and their next destination
#[derive(Parser, Debug)]
#[command(name = "airplane-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file; defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drop all tables, recreate the schema and seed the catalogs
    InitDb,

    /// Serve the HTTP API
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
