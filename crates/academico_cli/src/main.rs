//! Academic records console entry point.
//!
//! # Responsibility
//! - Parse configuration and start file logging.
//! - Rebuild and seed the catalog database, then hand over to the shell.
//! - Map fatal errors to exit status 1.

mod config;
mod error;
mod menu;
mod shell;

use academico_core::db::recreate_db;
use academico_core::{init_logging, seed_sample_catalog};
use clap::Parser;
use config::Config;
use error::ShellError;
use log::error;
use shell::Shell;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    let config = Config::parse();

    if let Err(err) = run(&config) {
        error!("event=app_exit module=cli status=error error={err}");
        eprintln!("Erro: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), ShellError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let log_dir = config.log_dir(&cwd);
    if let Err(err) = init_logging(config.log_level(), &log_dir) {
        eprintln!("aviso: logs desativados: {err}");
    }

    prepare_catalog(&config.db_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), &config.db_path);
    shell.run()
}

/// Drops the database file, migrates a new one and inserts the sample data.
fn prepare_catalog(db_path: &Path) -> Result<(), ShellError> {
    let mut conn = recreate_db(db_path)?;
    seed_sample_catalog(&mut conn).map_err(ShellError::Seed)?;
    Ok(())
}
