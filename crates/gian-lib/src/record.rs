// ABOUTME: Field record and draft request data structures
// ABOUTME: Covers the fixed procurement field set, JSON request files, and pasted lines

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::date::{DateMode, DateSpec};
use crate::error::ValidationError;
use crate::{GianError, Result};

/// Token count of a pasted tab-separated line: the date plus seven fields.
const PASTE_TOKEN_COUNT: usize = 8;

/// The closed set of procurement fields collected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    CourseName,
    EventName,
    RequestDetails,
    BudgetCategory,
    Vendor,
    Cost,
    ContactPerson,
    BudgetLimit,
}

impl FieldKind {
    /// Get all fields in form order
    pub fn all() -> &'static [Self] {
        &[
            Self::CourseName,
            Self::EventName,
            Self::RequestDetails,
            Self::BudgetCategory,
            Self::Vendor,
            Self::Cost,
            Self::ContactPerson,
            Self::BudgetLimit,
        ]
    }

    /// The Korean form label, used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Self::CourseName => "과정명",
            Self::EventName => "행사명",
            Self::RequestDetails => "요청사항",
            Self::BudgetCategory => "비목",
            Self::Vendor => "업체",
            Self::Cost => "비용",
            Self::ContactPerson => "담당자",
            Self::BudgetLimit => "예산한도",
        }
    }
}

/// One immutable snapshot of the form's field values
///
/// Values are kept as entered; blankness checks and template substitution
/// both trim before use. `budget_limit` is collected by the full form but
/// never consulted by the document template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldRecord {
    pub course_name: String,
    pub event_name: String,
    pub request_details: String,
    pub budget_category: String,
    pub budget_limit: String,
    pub vendor: String,
    pub cost: String,
    pub contact_person: String,
}

impl FieldRecord {
    /// Returns the raw value of a field.
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::CourseName => &self.course_name,
            FieldKind::EventName => &self.event_name,
            FieldKind::RequestDetails => &self.request_details,
            FieldKind::BudgetCategory => &self.budget_category,
            FieldKind::Vendor => &self.vendor,
            FieldKind::Cost => &self.cost,
            FieldKind::ContactPerson => &self.contact_person,
            FieldKind::BudgetLimit => &self.budget_limit,
        }
    }
}

/// A complete render request: the field record plus the schedule dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    /// The form's field values
    pub record: FieldRecord,
    /// The schedule dates as collected
    pub dates: DateSpec,
}

impl DraftRequest {
    /// Load a draft request from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a draft request from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GianError::from)
    }

    /// Serialize the request as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GianError::from)
    }

    /// Write the request to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }

    /// A blank request with an empty date entry of the given mode, for
    /// skeleton files the user fills in.
    pub fn skeleton(mode: DateMode) -> Self {
        Self {
            record: FieldRecord::default(),
            dates: DateSpec::empty(mode),
        }
    }

    /// Parse one pasted tab-separated line in the fixed order
    /// 날짜, 과정명, 행사명, 요청사항, 비목, 업체, 비용, 담당자.
    ///
    /// Every token is trimmed; a token count other than eight is rejected
    /// before any field is inspected. The date token becomes a
    /// [`DateSpec::Single`] entry.
    pub fn from_tab_line(line: &str) -> std::result::Result<Self, ValidationError> {
        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();
        if parts.len() != PASTE_TOKEN_COUNT {
            return Err(ValidationError::WrongTokenCount(parts.len()));
        }

        let record = FieldRecord {
            course_name: parts[1].to_string(),
            event_name: parts[2].to_string(),
            request_details: parts[3].to_string(),
            budget_category: parts[4].to_string(),
            budget_limit: String::new(),
            vendor: parts[5].to_string(),
            cost: parts[6].to_string(),
            contact_person: parts[7].to_string(),
        };

        Ok(Self {
            record,
            dates: DateSpec::Single(parts[0].to_string()),
        })
    }
}
