//! # Roster command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load roster.json, apply --data-dir / --compact
//!   ├─> Initialise logging
//!   ├─> Load fixtures from the data directory
//!   └─> Run one transformation and print its JSON result
//! ```
//!
//! ```bash
//! roster count Pat
//! roster --data-dir ./data order
//! RUST_LOG=debug roster unique
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // JSON results go to stdout

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use roster::fixtures::Fixtures;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.resolve_config()?;

    roster::logging::init(&config.log_level);

    let fixtures = Fixtures::load(&config.data_dir)
        .with_context(|| format!("Failed to load fixtures from {}", config.data_dir.display()))?;

    let value = cli::run_command(&cli.command, &fixtures)?;
    println!("{}", cli::render(&value, config.pretty)?);
    Ok(())
}
