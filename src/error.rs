//! Model Errors
//!
//! Every error here is raised while a document is being built or parsed.
//! A model that was built successfully always serializes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unsupported variant for {dialect}: {kind}")]
    UnsupportedVariant { dialect: &'static str, kind: String },

    #[error("Duplicate personal info field: {key}")]
    DuplicateIdentity { key: String },

    #[error("Invalid date format: {0}. Expected format: yyyy-MM")]
    InvalidYearMonth(String),

    #[error("Invalid ORCID: {0}. Expected format: dddd-dddd-dddd-dddd")]
    InvalidOrcid(String),

    #[error("Skill rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(f64),

    #[error("Invalid section position ({column}, {order}): indices start at 1")]
    InvalidPlacement { column: u32, order: u32 },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange { field: &'static str, value: f64, expected: &'static str },

    #[error("Invalid colour hex value: {0}. Expected six hex digits")]
    InvalidHexColor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ModelError {
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, ModelError::UnsupportedVariant { .. })
    }

    pub fn is_duplicate_identity(&self) -> bool {
        matches!(self, ModelError::DuplicateIdentity { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ModelError::OutOfRange { .. } | ModelError::RatingOutOfRange(_))
    }
}
