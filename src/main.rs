//! airplane-registry CLI entry point
//!
//! Parses arguments, dispatches to a command, prints any error to stderr
//! and exits non-zero on failure.

use airplane_registry::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
