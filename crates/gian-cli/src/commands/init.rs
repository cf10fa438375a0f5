// ABOUTME: 'gian init' command implementation
// ABOUTME: Creates a blank draft request file for the chosen date entry mode

use gian_lib::{DateMode, DraftRequest, GianError, Result};
use std::path::PathBuf;

/// Configuration for init command
pub struct InitConfig {
    pub mode: String,
    pub output: PathBuf,
    pub force: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Create a blank draft request file to fill in
pub fn run(config: &InitConfig) -> Result<()> {
    let mode = parse_mode(&config.mode)?;

    if config.dry_run {
        println!("[dry-run] Would create file: {}", config.output.display());
        return Ok(());
    }

    if config.output.exists() && !config.force {
        println!(
            "⚠️  {} already exists (use --force to overwrite)",
            config.output.display()
        );
        return Ok(());
    }

    let request = DraftRequest::skeleton(mode);
    request.save(&config.output)?;

    if config.verbose {
        println!("Created file: {}", config.output.display());
    }

    println!("✅ Draft request skeleton created!");
    println!();
    println!("Next steps:");
    println!("  1. Fill in the fields in {}", config.output.display());
    println!("  2. Run: gian generate {}", config.output.display());

    Ok(())
}

fn parse_mode(raw: &str) -> Result<DateMode> {
    match raw {
        "single" => Ok(DateMode::Single),
        "range" => Ok(DateMode::Range),
        "multi" => Ok(DateMode::Multi),
        other => Err(GianError::Mode(other.to_string())),
    }
}
