//! Document Model & Serializer
//!
//! `Resume<D>` is written once against [`Dialect`]; the dialect modules only
//! supply the config/header/footer shapes and the legal item kinds.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::ModelError;
use crate::layout::Layout;
use crate::section::Section;

/// Which side of the header a photo sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhotoDirection {
    Left,
    #[default]
    Right,
}

/// A complete CV in dialect `D`. Immutable once built.
pub struct Resume<D: Dialect> {
    config: D::Config,
    header: D::Header,
    footer: D::Footer,
    sections: Vec<Section>,
}

impl<D: Dialect> Resume<D> {
    /// Every part at its default, no sections.
    pub fn new() -> Self {
        Self {
            config: D::Config::default(),
            header: D::Header::default(),
            footer: D::Footer::default(),
            sections: vec![],
        }
    }

    pub fn builder() -> ResumeBuilder<D> {
        ResumeBuilder::default()
    }

    pub fn config(&self) -> &D::Config {
        &self.config
    }

    pub fn header(&self) -> &D::Header {
        &self.header
    }

    pub fn footer(&self) -> &D::Footer {
        &self.footer
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout::new(&self.sections)
    }

    pub fn to_json(&self) -> Result<Value, ModelError> {
        debug!(dialect = D::NAME, sections = self.sections.len(), "serializing resume");
        Ok(serde_json::to_value(self)?)
    }

    /// Compact text form; keys keep document order.
    pub fn to_json_string(&self) -> Result<String, ModelError> {
        debug!(dialect = D::NAME, sections = self.sections.len(), "serializing resume");
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The same document tree as [`Resume::to_json`], written as YAML.
    pub fn to_yaml(&self) -> Result<String, ModelError> {
        debug!(dialect = D::NAME, sections = self.sections.len(), "serializing resume as yaml");
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parses a YAML document with the same shape and checks as
    /// [`Resume::from_json`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ModelError> {
        Self::from_value(serde_yaml::from_str(yaml)?)
    }

    /// Parses a canonical document, applying the same item legality checks
    /// as [`ResumeBuilder::section`].
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let repr: ResumeRepr<D> = serde_json::from_value(value)?;
        debug!(dialect = D::NAME, sections = repr.sections.len(), "parsed resume");

        Ok(Resume::builder()
            .config(repr.config)
            .header(repr.header)
            .footer(repr.footer)
            .sections(repr.sections)?
            .build())
    }
}

impl<D: Dialect> Default for Resume<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> Clone for Resume<D> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            header: self.header.clone(),
            footer: self.footer.clone(),
            sections: self.sections.clone(),
        }
    }
}

impl<D: Dialect> PartialEq for Resume<D> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.header == other.header
            && self.footer == other.footer
            && self.sections == other.sections
    }
}

impl<D: Dialect> fmt::Debug for Resume<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Resume");
        out.field("dialect", &D::NAME)
            .field("config", &self.config)
            .field("header", &self.header);
        if D::HAS_FOOTER {
            out.field("footer", &self.footer);
        }
        out.field("sections", &self.sections).finish()
    }
}

impl<D: Dialect> Serialize for Resume<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if D::HAS_FOOTER { 4 } else { 3 };
        let mut doc = serializer.serialize_struct("Resume", len)?;
        doc.serialize_field("config", &self.config)?;
        doc.serialize_field("header", &self.header)?;
        if D::HAS_FOOTER {
            doc.serialize_field("footer", &self.footer)?;
        } else {
            doc.skip_field("footer")?;
        }
        doc.serialize_field("sections", &self.sections)?;
        doc.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = ""))]
struct ResumeRepr<D: Dialect> {
    #[serde(default)]
    config: D::Config,
    #[serde(default)]
    header: D::Header,
    #[serde(default)]
    footer: D::Footer,
    #[serde(default)]
    sections: Vec<Section>,
}

/// Incremental construction of a [`Resume`]. Sections are checked against
/// the dialect as they are added.
pub struct ResumeBuilder<D: Dialect> {
    resume: Resume<D>,
}

impl<D: Dialect> Default for ResumeBuilder<D> {
    fn default() -> Self {
        Self { resume: Resume::new() }
    }
}

impl<D: Dialect> fmt::Debug for ResumeBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeBuilder").field("resume", &self.resume).finish()
    }
}

impl<D: Dialect> ResumeBuilder<D> {
    pub fn config(mut self, config: D::Config) -> Self {
        self.resume.config = config;
        self
    }

    pub fn header(mut self, header: D::Header) -> Self {
        self.resume.header = header;
        self
    }

    pub fn footer(mut self, footer: D::Footer) -> Self {
        self.resume.footer = footer;
        self
    }

    /// Appends `section`, failing with [`ModelError::UnsupportedVariant`] on
    /// the first item kind the dialect does not allow.
    pub fn section(mut self, section: Section) -> Result<Self, ModelError> {
        for item in section.items() {
            D::check_kind(item.kind())?;
        }
        self.resume.sections.push(section);
        Ok(self)
    }

    pub fn sections<I>(self, sections: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = Section>,
    {
        sections.into_iter().try_fold(self, |builder, section| builder.section(section))
    }

    pub fn build(self) -> Resume<D> {
        self.resume
    }
}
