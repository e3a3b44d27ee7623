//! Info command implementation

use super::validate::{format_admm_info, format_sparsity_table};
use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::prune::load_config;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("ADMM:");
            println!("{}", format_admm_info(&config.admm));
            println!();
            println!("Sparsity ({} parameter(s)):", config.sparsity.len());
            println!("{}", format_sparsity_table(&config.sparsity));
        }
        OutputFormat::Yaml => {
            let yaml = config.to_yaml().map_err(|e| e.to_string())?;
            println!("{yaml}");
        }
    }

    Ok(())
}
