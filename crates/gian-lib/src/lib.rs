// ABOUTME: Core library for the gian CLI providing draft document generation
// ABOUTME: Includes field records, date/cost normalization, and template rendering

pub mod cost;
pub mod date;
pub mod error;
pub mod record;
pub mod render;

pub use date::{parse_reference_date, saved_stamp, DateMode, DateSpec};
pub use error::{GianError, ValidationError};
pub use record::{DraftRequest, FieldKind, FieldRecord};
pub use render::{DraftRenderer, FormProfile, RenderedDraft, DRAFT_FILE_NAME};

/// Result type alias using [`GianError`]
pub type Result<T> = std::result::Result<T, GianError>;
