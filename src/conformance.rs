//! Schema Conformance - Rule/Report Separation
//!
//! Rules produce structured violations against a serialized document.
//! The export pipeline decides what a violation costs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::dialect::{Dialect, SCHEMA_VERSION};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    /// JSON pointer to the offending value, when the rule knows it.
    #[serde(default)]
    pub instance_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConformanceReport {
    pub valid: bool,
    pub dialect: String,
    pub schema_version: String,
    pub violations: Vec<SchemaViolation>,
}

impl ConformanceReport {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    /// `rule: message` per violation, joined with `; `.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| match &v.instance_path {
                Some(path) => format!("{}: {} at {}", v.rule, v.message, path),
                None => format!("{}: {}", v.rule, v.message),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A check over a serialized document.
pub trait ConformanceRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, document: &Value) -> Vec<SchemaViolation>;
}

// --- Concrete Rules ---

/// Draft-07 validation against a dialect's bundled schema.
pub struct JsonSchemaRule {
    validator: jsonschema::Validator,
}

impl JsonSchemaRule {
    pub fn compile(schema_source: &str) -> Result<Self, String> {
        let schema: Value = serde_json::from_str(schema_source).map_err(|e| e.to_string())?;
        let validator = jsonschema::draft7::new(&schema).map_err(|e| e.to_string())?;
        Ok(Self { validator })
    }

    pub fn for_dialect<D: Dialect>() -> Result<Self, String> {
        debug!(dialect = D::NAME, schema = %D::schema_path(), "compiling schema");
        Self::compile(D::schema_source())
    }
}

impl ConformanceRule for JsonSchemaRule {
    fn name(&self) -> &'static str { "json_schema" }

    fn check(&self, document: &Value) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(document)
            .map(|error| {
                let path = error.instance_path().to_string();
                SchemaViolation {
                    rule: self.name().to_string(),
                    severity: ViolationSeverity::Error,
                    message: error.to_string(),
                    instance_path: (!path.is_empty()).then_some(path),
                }
            })
            .collect()
    }
}

/// An absent value must be `null`, never `{}`.
pub struct NoEmptyObjectRule;

impl NoEmptyObjectRule {
    fn walk(&self, value: &Value, path: &mut String, out: &mut Vec<SchemaViolation>) {
        match value {
            Value::Object(map) if map.is_empty() && !path.is_empty() => {
                out.push(SchemaViolation {
                    rule: self.name().to_string(),
                    severity: ViolationSeverity::Error,
                    message: "empty object where a value or null is expected".to_string(),
                    instance_path: Some(path.clone()),
                });
            }
            Value::Object(map) => {
                for (key, child) in map {
                    let len = path.len();
                    path.push('/');
                    path.push_str(key);
                    self.walk(child, path, out);
                    path.truncate(len);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&index.to_string());
                    self.walk(child, path, out);
                    path.truncate(len);
                }
            }
            _ => {}
        }
    }
}

impl ConformanceRule for NoEmptyObjectRule {
    fn name(&self) -> &'static str { "no_empty_object" }

    fn check(&self, document: &Value) -> Vec<SchemaViolation> {
        let mut out = vec![];
        self.walk(document, &mut String::new(), &mut out);
        out
    }
}

/// Runs every rule for one dialect and collects a report.
pub struct SchemaValidator {
    dialect: &'static str,
    rules: Vec<Box<dyn ConformanceRule>>,
}

impl SchemaValidator {
    /// Compiles the dialect's schema; fails only if the bundled schema is
    /// itself malformed.
    pub fn for_dialect<D: Dialect>() -> Result<Self, String> {
        Ok(Self {
            dialect: D::NAME,
            rules: vec![Box::new(JsonSchemaRule::for_dialect::<D>()?), Box::new(NoEmptyObjectRule)],
        })
    }

    pub fn with_rule(mut self, rule: Box<dyn ConformanceRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn validate(&self, document: &Value) -> ConformanceReport {
        let mut violations = vec![];

        for rule in &self.rules {
            let found = rule.check(document);
            trace!(rule = rule.name(), violations = found.len(), "conformance rule checked");
            violations.extend(found);
        }

        ConformanceReport {
            valid: !violations.iter().any(|v| v.severity == ViolationSeverity::Error),
            dialect: self.dialect.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            violations,
        }
    }
}
