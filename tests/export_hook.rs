//! Export always validates.
//!
//! Kept in its own test binary so the process-wide call counter is not
//! shared with other exporting tests.

#![cfg(feature = "test-hooks")]

use cvgen_core::pipeline::{get_validation_call_count, reset_validation_call_count};
use cvgen_core::{
    AltaCv, AwesomeCv, ConformanceRule, ExportOptions, ExportPipeline, FailureMode, Placement, Resume,
    SchemaViolation, Section, SectionItem, ViolationSeverity,
};
use serde_json::Value;

struct RejectAll;

impl ConformanceRule for RejectAll {
    fn name(&self) -> &'static str { "reject_all" }

    fn check(&self, _document: &Value) -> Vec<SchemaViolation> {
        vec![SchemaViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "rejected".to_string(),
            instance_path: None,
        }]
    }
}

#[test]
fn invariant_export_calls_validate() {
    reset_validation_call_count();

    let alta = ExportPipeline::<AltaCv>::new(ExportOptions::default()).unwrap();
    let resume = Resume::<AltaCv>::builder()
        .section(Section::new("Tags", Placement::default()).with_item(SectionItem::tag("Rust")))
        .unwrap()
        .build();
    alta.export(&resume).unwrap();

    // a rejected export was still validated first
    let strict = ExportPipeline::<AltaCv>::new(ExportOptions::default()).unwrap().with_rule(Box::new(RejectAll));
    assert!(strict.export(&resume).is_err());

    let options = ExportOptions { failure_mode: FailureMode::Log, ..Default::default() };
    let awesome = ExportPipeline::<AwesomeCv>::new(options).unwrap();
    awesome.export(&Resume::new()).unwrap();

    assert_eq!(get_validation_call_count(), 3);
}
