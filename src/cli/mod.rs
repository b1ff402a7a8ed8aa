//! CLI module for the airplane registry
//!
//! Provides command-line interface for:
//! - init-db: Recreate and seed the database
//! - serve: Run the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_db, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
