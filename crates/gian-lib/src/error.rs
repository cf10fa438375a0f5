// ABOUTME: Error types for gian operations
// ABOUTME: Defines GianError plus the ValidationError taxonomy for draft rendering

use thiserror::Error;

use crate::record::FieldKind;

/// Errors that can occur during gian operations
#[derive(Error, Debug)]
pub enum GianError {
    /// I/O error reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown date entry mode name
    #[error("Unknown date mode '{0}' (expected: single, range, multi)")]
    Mode(String),

    /// Draft validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validation failures surfaced to the person filling in the form.
///
/// The messages are the Korean user-facing texts of the form tool; callers
/// display them verbatim and let the user correct the input. No variant is
/// fatal and none is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were blank after trimming.
    #[error("모든 항목을 빠짐없이 입력해주세요.\n비어 있는 항목: {}", field_labels(.0))]
    MissingFields(Vec<FieldKind>),

    /// A pasted line did not split into exactly eight values. Reported as a
    /// completeness failure, same class as [`ValidationError::MissingFields`].
    #[error("입력값이 8개가 아닙니다.\n날짜, 과정명, 행사명, 요청사항, 비목, 업체, 비용, 담당자 순으로 입력했는지 확인해주세요.")]
    WrongTokenCount(usize),

    /// A date token failed its digit-length pattern or names no real date.
    #[error("날짜 \"{token}\"이(가) 올바르지 않습니다. {expected}자리 숫자로 입력해주세요.")]
    BadDate { token: String, expected: usize },

    /// Multi-date mode was invoked with no dates collected.
    #[error("특정 일자를 하나 이상 입력해주세요.")]
    MissingDates,

    /// The cleaned cost string is not a non-negative number.
    #[error("비용은 숫자 형식이어야 합니다. 쉼표 또는 '원' 제거 후 숫자로만 입력해주세요.")]
    BadCost(String),
}

impl ValidationError {
    /// Shorthand for a bad 4-digit MMDD token.
    pub(crate) fn bad_mmdd(token: &str) -> Self {
        Self::BadDate {
            token: token.to_string(),
            expected: 4,
        }
    }

    /// Shorthand for a bad 8-digit YYYYMMDD token.
    pub(crate) fn bad_ymd(token: &str) -> Self {
        Self::BadDate {
            token: token.to_string(),
            expected: 8,
        }
    }
}

fn field_labels(kinds: &[FieldKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}
