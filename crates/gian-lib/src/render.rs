// ABOUTME: Form profile system and the draft rendering pipeline
// ABOUTME: Validates a field record, formats date and cost, and fills the document template

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cost;
use crate::date::{DateMode, DateSpec};
use crate::error::ValidationError;
use crate::record::{FieldKind, FieldRecord};

/// Fixed filename the finished document is saved under
pub const DRAFT_FILE_NAME: &str = "기안서.txt";

/// A form variant's shape: which fields it insists on and how it takes dates
///
/// Form variants differ only in these two knobs, so one renderer
/// parameterized by a profile covers all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProfile {
    /// Fields that must be non-blank before rendering
    pub required: Vec<FieldKind>,
    /// How this variant collects its schedule dates
    pub date_mode: DateMode,
}

impl FormProfile {
    /// The paste-entry shape: the template-consumed fields plus the contact
    /// person. Cost is validated but may be blank, in which case the money
    /// line renders without a numeral.
    pub fn standard(date_mode: DateMode) -> Self {
        Self {
            required: vec![
                FieldKind::CourseName,
                FieldKind::EventName,
                FieldKind::RequestDetails,
                FieldKind::BudgetCategory,
                FieldKind::Vendor,
                FieldKind::ContactPerson,
            ],
            date_mode,
        }
    }

    /// The full-form shape: every field must be filled in, including the
    /// budget limit the template never prints.
    pub fn extended(date_mode: DateMode) -> Self {
        Self {
            required: FieldKind::all().to_vec(),
            date_mode,
        }
    }

    /// Whether this profile insists on the given field
    pub fn requires(&self, kind: FieldKind) -> bool {
        self.required.contains(&kind)
    }
}

/// The finished document text, derived entirely from one record and date spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDraft {
    /// The complete document, ready to save as-is
    pub text: String,
}

impl fmt::Display for RenderedDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders field records into the fixed vehicle-rental request document
#[derive(Debug, Clone)]
pub struct DraftRenderer {
    profile: FormProfile,
}

impl DraftRenderer {
    /// Create a renderer for one form profile
    pub fn new(profile: FormProfile) -> Self {
        Self { profile }
    }

    /// The profile this renderer validates against
    pub fn profile(&self) -> &FormProfile {
        &self.profile
    }

    /// Validates the record and renders the document.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// completeness of the profile's required fields, then the date spec,
    /// then the cost entry. `today` resolves year-less 4-digit dates and is
    /// the only calendar input; rendering itself touches no clock, so the
    /// same inputs always produce the same document.
    pub fn render(
        &self,
        record: &FieldRecord,
        dates: &DateSpec,
        today: NaiveDate,
    ) -> Result<RenderedDraft, ValidationError> {
        let blank: Vec<FieldKind> = self
            .profile
            .required
            .iter()
            .copied()
            .filter(|kind| record.get(*kind).trim().is_empty())
            .collect();
        if !blank.is_empty() {
            return Err(ValidationError::MissingFields(blank));
        }

        let schedule = dates.format(today)?;
        let cost = cost::normalize(&record.cost)?;

        let text = format!(
            r#"{course} {event} 진행을 위한 차량임차


연수운영부-   호(202 .  .  .) 요청에 의거 {course} {event} 진행을 위한 차량을 다음과 같이 임차하고자 합니다.

1. 임차내역 : {request}

2. 임차일정 : {schedule}
  - 상세내역 [붙임] 참조

3. 소요예산 : ￦{cost}.- (부가세 포함)

4. 처리비목 : {category}

5. 계 약 처 : (주){vendor}

6. 계약방법 : 수의계약 (계약규정 제41조 제1항 제1호에 의거)

7. 기    타
   가. 계약규정 제4조 제1항 제1호에 의거 계약서 작성을 생략하고 이행각서를 징구하고자 함
   나. 본 품의로 지출결의에 갈음하고자 함


붙       임 : 1. 견적서 각 1부,
            2. 이행각서(안) 1부,
            3. 관련 공문 1부, 끝."#,
            course = record.course_name.trim(),
            event = record.event_name.trim(),
            request = record.request_details.trim(),
            schedule = schedule,
            cost = cost,
            category = record.budget_category.trim(),
            vendor = record.vendor.trim(),
        );

        Ok(RenderedDraft { text })
    }
}
