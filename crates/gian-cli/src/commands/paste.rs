// ABOUTME: 'gian paste' command implementation
// ABOUTME: Renders the draft document from one tab-separated line of field values

use gian_lib::{DateMode, DraftRenderer, DraftRequest, FormProfile, Result};
use std::io::Read;
use std::path::PathBuf;

use super::{deliver, resolve_today};

/// Configuration for paste command
pub struct PasteConfig {
    pub line: Option<String>,
    pub output: PathBuf,
    pub today: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Render the draft document from one pasted tab-separated line
pub fn run(config: &PasteConfig) -> Result<()> {
    let line = match &config.line {
        Some(line) => line.clone(),
        None => read_stdin_line()?,
    };

    let request = DraftRequest::from_tab_line(&line)?;
    let today = resolve_today(config.today.as_deref())?;

    let renderer = DraftRenderer::new(FormProfile::standard(DateMode::Single));
    let draft = renderer.render(&request.record, &request.dates, today)?;

    deliver(&draft, &config.output, today, config.dry_run, config.verbose)
}

/// Reads everything pasted on stdin and keeps the first non-empty line.
fn read_stdin_line() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let line = buffer
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    Ok(line.to_string())
}
