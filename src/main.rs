//! Podar CLI
//!
//! Inspect and validate ADMM pruning configurations.
//!
//! # Usage
//!
//! ```bash
//! # Validate a pruning config
//! podar validate prune.yaml --detailed
//!
//! # Show config contents
//! podar info prune.yaml --format yaml
//! ```

use clap::Parser;
use podar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
