//! `QuickConn` CLI - command-line interface for quick-connect descriptors
//!
//! Parses and renders quick-connect strings, reads external URIs, and replays
//! edits through the host editor with saved-state support.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use quickconn_core::tracing::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let Cli {
        config,
        verbose,
        quiet,
        command,
    } = Cli::parse();
    let config_path = config.as_deref();

    let result = util::load_settings(config_path).and_then(|settings| {
        init_logging(verbose, quiet, &settings.log_level);
        commands::dispatch(config_path, &settings, command)
    });

    if let Err(e) = result {
        if !quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Installs the subscriber: `RUST_LOG` wins, then `-q`/`-v`, then settings
fn init_logging(verbose: u8, quiet: bool, configured: &str) {
    let base = configured.parse::<TracingLevel>().unwrap_or_else(|err| {
        eprintln!("Warning: {err}, using warn");
        TracingLevel::Warn
    });
    let level = if quiet {
        TracingLevel::Error
    } else {
        base.raised_by(verbose)
    };

    let mut config = TracingConfig::new().with_level(level);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        config = config.with_filter(filter);
    }
    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: {e}");
    }
}
