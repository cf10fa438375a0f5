// ABOUTME: 'gian generate' command implementation
// ABOUTME: Renders the draft document from a request file and writes it to disk

use gian_lib::{DraftRenderer, DraftRequest, FormProfile, Result};
use std::path::PathBuf;

use super::{deliver, resolve_today};

/// Configuration for generate command
pub struct GenerateConfig {
    pub file: PathBuf,
    pub output: PathBuf,
    pub today: Option<String>,
    pub extended: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Render the draft document from a request file
pub fn run(config: &GenerateConfig) -> Result<()> {
    if config.verbose {
        println!("Loading request from {}", config.file.display());
    }

    let request = DraftRequest::from_file(&config.file)?;
    let today = resolve_today(config.today.as_deref())?;

    let profile = if config.extended {
        FormProfile::extended(request.dates.mode())
    } else {
        FormProfile::standard(request.dates.mode())
    };
    let renderer = DraftRenderer::new(profile);
    let draft = renderer.render(&request.record, &request.dates, today)?;

    deliver(&draft, &config.output, today, config.dry_run, config.verbose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gian_lib::{DateSpec, FieldRecord};

    fn write_request(dir: &std::path::Path) -> PathBuf {
        let request = DraftRequest {
            record: FieldRecord {
                course_name: "안전교육".to_string(),
                event_name: "워크숍".to_string(),
                request_details: "대형버스 1대".to_string(),
                budget_category: "교육비".to_string(),
                budget_limit: String::new(),
                vendor: "한국여행사".to_string(),
                cost: "500,000원".to_string(),
                contact_person: "홍길동".to_string(),
            },
            dates: DateSpec::Single("20250401".to_string()),
        };
        let path = dir.join("draft.json");
        request.save(&path).unwrap();
        path
    }

    #[test]
    fn test_run_renders_and_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_request(dir.path());
        let output = dir.path().join("기안서.txt");

        run(&GenerateConfig {
            file,
            output: output.clone(),
            today: Some("20250401".to_string()),
            extended: false,
            dry_run: false,
            verbose: false,
        })
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("안전교육 워크숍 진행을 위한 차량임차"));
        assert!(text.contains("3. 소요예산 : ￦500,000.- (부가세 포함)"));
    }

    #[test]
    fn test_run_extended_requires_budget_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_request(dir.path());
        let output = dir.path().join("기안서.txt");

        let err = run(&GenerateConfig {
            file,
            output,
            today: Some("20250401".to_string()),
            extended: true,
            dry_run: false,
            verbose: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("예산한도"));
    }

    #[test]
    fn test_run_missing_request_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(&GenerateConfig {
            file: dir.path().join("없는파일.json"),
            output: dir.path().join("기안서.txt"),
            today: Some("20250401".to_string()),
            extended: false,
            dry_run: false,
            verbose: false,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
