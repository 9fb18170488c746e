//! RosterDB Binary
//!
//! Loads an optional database file and runs the menu on stdin.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rosterdb::shell::Shell;
use rosterdb::{Config, Database, RosterError};
use tracing_subscriber::{fmt, EnvFilter};

/// RosterDB
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "In-memory employee database")]
#[command(version)]
struct Args {
    /// Database file to load at startup
    database_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{}", RosterError::Usage(e.to_string()));
            return ExitCode::from(2);
        }
    };

    let mut builder = Config::builder();
    if let Some(path) = &args.database_file {
        builder = builder.database_path(path);
    }
    let config = builder.build();

    // Initialize tracing/logging; stdout is reserved for the listing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("RosterDB v{}", rosterdb::VERSION);

    let mut database = match Database::open(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::debug!(error = ?e, "failed to open database");
            eprintln!("{e}\nThe program will now exit.");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(records = database.len(), "database ready");

    let stdin = io::stdin();
    let mut shell = Shell::new(&mut database, stdin.lock(), io::stdout(), io::stderr());
    if let Err(e) = shell.run() {
        tracing::debug!(error = ?e, "session aborted");
        eprintln!("{e}\nThe program will now exit.");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
