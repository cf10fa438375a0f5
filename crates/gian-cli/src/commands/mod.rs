// ABOUTME: Command implementations for the gian CLI
// ABOUTME: Submodules for init, generate, and paste plus shared delivery helpers

use chrono::{Local, NaiveDate};
use gian_lib::{parse_reference_date, saved_stamp, RenderedDraft, Result};
use std::fs;
use std::path::Path;

pub mod generate;
pub mod init;
pub mod paste;

/// Resolve the reference date: an explicit 8-digit override, or the system
/// date. Year-less schedule dates and the saved stamp both derive from it.
pub(crate) fn resolve_today(overridden: Option<&str>) -> Result<NaiveDate> {
    match overridden {
        Some(token) => Ok(parse_reference_date(token)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Write the finished document, or preview it in dry-run mode.
pub(crate) fn deliver(
    draft: &RenderedDraft,
    output: &Path,
    today: NaiveDate,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    if dry_run || verbose {
        println!("{draft}");
        println!();
    }

    if dry_run {
        println!("[dry-run] Would create file: {}", output.display());
        return Ok(());
    }

    fs::write(output, draft.text.as_bytes())?;
    println!("✅ Draft written to {}", output.display());
    println!("저장일자: {}", saved_stamp(today));
    Ok(())
}
