//! Export Pipeline - Single Entry Point
//!
//! `export` always validates. There is no path from a `Resume` to an
//! `ExportedResume` that skips the conformance check.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::conformance::{ConformanceReport, ConformanceRule, SchemaValidator};
use crate::dialect::{Dialect, SCHEMA_VERSION};
use crate::error::ModelError;
use crate::hashing::document_digest;
use crate::resume::Resume;
use crate::ENGINE_VERSION;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_call_count() -> u32 {
    VALIDATION_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_call_count() {
    VALIDATION_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Schema for {dialect} failed to compile: {message}")]
    SchemaCompilation { dialect: &'static str, message: String },

    #[error("Conformance check failed: {0}")]
    ConformanceFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What an export does with a document that violates its schema.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Reject the export.
    #[default]
    Block,
    /// Export anyway and log a warning per violation.
    Warn,
    /// Export anyway; violations are only kept in the report.
    Log,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportOptions {
    #[serde(default)]
    pub failure_mode: FailureMode,
    /// Indented text output from [`ExportedResume::to_text`].
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedResume {
    pub dialect: String,
    pub schema_version: String,
    pub engine_version: String,
    pub document: Value,
    /// SHA-256 of the canonical document text.
    pub digest: String,
    pub report: ConformanceReport,
    #[serde(skip)]
    pretty: bool,
}

impl ExportedResume {
    /// The document as text, honouring the `pretty` export option.
    pub fn to_text(&self) -> Result<String, PipelineError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(&self.document)?
        } else {
            serde_json::to_string(&self.document)?
        };
        Ok(text)
    }
}

/// Serialize-and-validate for one dialect. The schema is compiled once in
/// [`ExportPipeline::new`].
pub struct ExportPipeline<D: Dialect> {
    options: ExportOptions,
    validator: SchemaValidator,
    dialect: PhantomData<D>,
}

impl<D: Dialect> ExportPipeline<D> {
    pub fn new(options: ExportOptions) -> Result<Self, PipelineError> {
        let validator = SchemaValidator::for_dialect::<D>()
            .map_err(|message| PipelineError::SchemaCompilation { dialect: D::NAME, message })?;
        Ok(Self { options, validator, dialect: PhantomData })
    }

    /// Adds a house rule checked after the dialect schema.
    pub fn with_rule(mut self, rule: Box<dyn ConformanceRule>) -> Self {
        self.validator = self.validator.with_rule(rule);
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Validate a serialized document.
    ///
    /// This is the ONLY validation entry point.
    pub fn validate(&self, document: &Value) -> ConformanceReport {
        #[cfg(feature = "test-hooks")]
        VALIDATION_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        self.validator.validate(document)
    }

    /// Serialize `resume` and check it against the dialect schema.
    pub fn export(&self, resume: &Resume<D>) -> Result<ExportedResume, PipelineError> {
        let document = resume.to_json()?;

        // MANDATORY: every export is validated.
        let report = self.validate(&document);

        if !report.valid {
            match self.options.failure_mode {
                FailureMode::Block => {
                    return Err(PipelineError::ConformanceFailed(report.summary()));
                }
                FailureMode::Warn => {
                    for violation in &report.violations {
                        warn!(
                            dialect = D::NAME,
                            rule = %violation.rule,
                            path = violation.instance_path.as_deref().unwrap_or(""),
                            "{}",
                            violation.message
                        );
                    }
                }
                FailureMode::Log => {}
            }
        }

        let digest = document_digest(D::NAME, &document)?;
        info!(dialect = D::NAME, digest = %digest, valid = report.valid, "resume exported");

        Ok(ExportedResume {
            dialect: D::NAME.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            document,
            digest,
            report,
            pretty: self.options.pretty,
        })
    }
}
