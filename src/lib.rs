//! CV Generator Core - Typed Resume Documents
//!
//! # Contract
//! 1. A resume is config + header (+ footer) + ordered sections
//! 2. Dialects fix the shapes and the legal item kinds
//! 3. Illegal content fails at build time, never at serialization
//! 4. Serialization is deterministic and keeps declaration order
//! 5. Every export is checked against the dialect schema

pub mod error;
pub mod dialect;
pub mod duration;
pub mod personal_info;
pub mod content;
pub mod section;
pub mod layout;
pub mod resume;
pub mod altacv;
pub mod awesomecv;
pub mod conformance;
pub mod hashing;
pub mod pipeline;

pub use error::ModelError;
pub use dialect::{Dialect, ItemKind, SCHEMA_VERSION};
pub use duration::{Duration, YearMonth};
pub use personal_info::{InfoField, PersonalInfoSet};
pub use content::{
    Achievement, Event, Honor, HonorList, Item, SectionItem, Skill, SkillLevel, WheelChart, WheelChartSlice,
};
pub use section::{Placement, Section};
pub use layout::Layout;
pub use resume::{PhotoDirection, Resume, ResumeBuilder};
pub use altacv::{AltaCv, AltaCvResume};
pub use awesomecv::{AwesomeCv, AwesomeCvResume};
pub use conformance::{ConformanceReport, ConformanceRule, SchemaValidator, SchemaViolation, ViolationSeverity};
pub use hashing::{canonical_json, document_digest};
pub use pipeline::{ExportOptions, ExportPipeline, ExportedResume, FailureMode, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
