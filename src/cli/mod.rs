//! CLI module for podar
//!
//! This module contains all CLI command handlers and utilities.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, InfoArgs, OutputFormat, ValidateArgs};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
