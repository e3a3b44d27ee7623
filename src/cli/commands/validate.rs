//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::prune::{load_config, AdmmConfig, SparsitySpec};

/// Format ADMM settings as a string
pub fn format_admm_info(admm: &AdmmConfig) -> String {
    format!(
        "  Update period: {} epoch(s)\n  Rho: {}",
        admm.update_period, admm.rho
    )
}

/// Format the per-parameter fraction table as a string
pub fn format_sparsity_table(sparsity: &SparsitySpec) -> String {
    let width = sparsity.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    sparsity
        .iter()
        .map(|(name, fraction)| format!("  {name:<width$}  {fraction:.3}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Validation failed: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Configuration is valid ({} tracked parameter(s))",
            config.sparsity.len()
        ),
    );

    if args.detailed && level != LogLevel::Quiet {
        println!();
        println!("ADMM:");
        println!("{}", format_admm_info(&config.admm));
        println!();
        println!("Sparsity:");
        println!("{}", format_sparsity_table(&config.sparsity));
    }

    Ok(())
}
