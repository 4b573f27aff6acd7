// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Lumen - hardware tier probe
//!
//! Entry point for the Lumen CLI application.

use clap::Parser;

use lumen::cli::{Cli, Commands};
use lumen::commands;
use lumen::config::Settings;
use lumen::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on crate diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "lumen=trace"
        } else {
            "lumen=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Probe(args) => commands::probe::execute(&args, cli.format, &settings)?,
        Commands::Check(args) => commands::check::execute(&args, cli.format, &settings)?,
        Commands::Tiers => commands::tiers::execute(cli.format)?,
    }

    Ok(())
}
