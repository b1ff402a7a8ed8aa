//! CLI command implementations
//!
//! `init-db` is the only place the catalogs are seeded. `serve` refuses to
//! start against a database that was never initialized.

use std::path::Path;
use std::sync::Arc;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{log_event, Event, Logger};
use crate::service::RecordService;
use crate::storage::Database;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.config.as_deref(), cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(config_path: Option<&Path>, cmd: Command) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);
    log_event(Event::BootStart, &[]);
    log_event(
        Event::ConfigLoaded,
        &[("database", &config.database_path().display().to_string())],
    );

    match cmd {
        Command::InitDb => init_db(&config),
        Command::Serve { port } => serve(&config, port),
    }
}

/// Drop all tables, recreate the schema and seed the catalogs.
pub fn init_db(config: &Config) -> CliResult<()> {
    Database::initialize_at(config.database_path())?;
    println!("Initialized the database.");
    Ok(())
}

/// Open the database and serve the HTTP API until stopped.
pub fn serve(config: &Config, port: Option<u16>) -> CliResult<()> {
    let database = Database::open(config.database_path())?;
    let service = RecordService::new(Arc::new(database));

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }
    let server = HttpServer::with_config(http_config, service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> Config {
        Config {
            data_dir: dir.join("instance"),
            ..Default::default()
        }
    }

    #[test]
    fn test_init_db_creates_seeded_snapshot() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        init_db(&config).unwrap();

        let db = Database::open(config.database_path()).unwrap();
        assert_eq!(db.tables().pairing_count(), 6);
        assert_eq!(db.airplane_count(), 0);
    }

    #[test]
    fn test_serve_requires_init_db() {
        let tmp = TempDir::new().unwrap();
        let err = serve(&config_in(tmp.path()), None).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::StorageError);
    }
}
