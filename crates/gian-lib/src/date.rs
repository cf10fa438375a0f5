// ABOUTME: Schedule date specifications and formatting
// ABOUTME: Parses 4-digit MMDD / 8-digit YYYYMMDD tokens and derives weekday labels

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Sunday-first weekday labels for the schedule line
const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

static MMDD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));
static YMD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").expect("valid regex"));

/// How a form variant collects its schedule dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMode {
    Single,
    Range,
    Multi,
}

/// The schedule dates exactly as collected by the form
///
/// 4-digit MMDD tokens carry no year of their own; they are resolved against
/// the reference date handed to [`DateSpec::format`], never against a clock
/// read inside the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSpec {
    /// One 8-digit YYYYMMDD date
    Single(String),
    /// Start and end of a rental period as 4-digit MMDD tokens
    Range { start: String, end: String },
    /// An ordered set of 4-digit MMDD tokens
    Multi(Vec<String>),
}

impl DateSpec {
    /// The entry mode this spec was collected under
    pub fn mode(&self) -> DateMode {
        match self {
            Self::Single(_) => DateMode::Single,
            Self::Range { .. } => DateMode::Range,
            Self::Multi(_) => DateMode::Multi,
        }
    }

    /// An empty spec of the given mode, for skeleton request files.
    pub fn empty(mode: DateMode) -> Self {
        match mode {
            DateMode::Single => Self::Single(String::new()),
            DateMode::Range => Self::Range {
                start: String::new(),
                end: String::new(),
            },
            DateMode::Multi => Self::Multi(Vec::new()),
        }
    }

    /// Formats the schedule line for the document.
    ///
    /// Single dates become `YYYY.MM.DD.`; range and multi entries become
    /// `MM/DD(요일)` tokens resolved in `today`'s year, joined as
    /// `"시작 에서 끝 까지"` or a comma-separated list. Tokens that fail
    /// their digit pattern are rejected, never coerced.
    pub fn format(&self, today: NaiveDate) -> Result<String, ValidationError> {
        match self {
            Self::Single(raw) => format_single(raw),
            Self::Range { start, end } => {
                let start = format_mmdd(start, today.year())?;
                let end = format_mmdd(end, today.year())?;
                Ok(format!("{start} 에서 {end} 까지"))
            }
            Self::Multi(dates) => {
                if dates.is_empty() {
                    return Err(ValidationError::MissingDates);
                }
                let formatted = dates
                    .iter()
                    .map(|token| format_mmdd(token, today.year()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(formatted.join(", "))
            }
        }
    }
}

/// Formats an 8-digit token as `YYYY.MM.DD.` by splitting its substrings.
/// This mode is textual only; the calendar is never consulted.
fn format_single(token: &str) -> Result<String, ValidationError> {
    if !YMD_PATTERN.is_match(token) {
        return Err(ValidationError::bad_ymd(token));
    }
    Ok(format!(
        "{}.{}.{}.",
        &token[..4],
        &token[4..6],
        &token[6..8]
    ))
}

/// Formats a 4-digit MMDD token as `MM/DD(요일)` in the given year.
///
/// Month/day combinations that name no real date in that year are rejected
/// rather than rolled over into the next month.
fn format_mmdd(token: &str, year: i32) -> Result<String, ValidationError> {
    if !MMDD_PATTERN.is_match(token) {
        return Err(ValidationError::bad_mmdd(token));
    }
    let month: u32 = token[..2].parse().map_err(|_| ValidationError::bad_mmdd(token))?;
    let day: u32 = token[2..].parse().map_err(|_| ValidationError::bad_mmdd(token))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::bad_mmdd(token))?;

    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    Ok(format!("{}/{}({})", &token[..2], &token[2..], weekday))
}

/// Parses an 8-digit YYYYMMDD token into a calendar date, for reference-date
/// overrides supplied by the caller.
pub fn parse_reference_date(token: &str) -> Result<NaiveDate, ValidationError> {
    if !YMD_PATTERN.is_match(token) {
        return Err(ValidationError::bad_ymd(token));
    }
    let year: i32 = token[..4].parse().map_err(|_| ValidationError::bad_ymd(token))?;
    let month: u32 = token[4..6].parse().map_err(|_| ValidationError::bad_ymd(token))?;
    let day: u32 = token[6..].parse().map_err(|_| ValidationError::bad_ymd(token))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ValidationError::bad_ymd(token))
}

/// Formats the caller-side saved-at stamp as `YYYY.MM.DD.`.
pub fn saved_stamp(date: NaiveDate) -> String {
    date.format("%Y.%m.%d.").to_string()
}
