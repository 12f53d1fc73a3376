//! Dialects - Variant Registry
//!
//! A dialect fixes the config/header/footer shapes, the item kinds a
//! section may hold, and the schema the serialized document must satisfy.
//! The serializer is written once against [`Dialect`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ModelError;

/// Directory component of the bundled schema documents.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Discriminator of a section item, as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Divider,
    NewLine,
    NewPage,
    Tag,
    Quote,
    Paragraph,
    Generic,
    Achievement,
    Skill,
    Item,
    Event,
    EventEntry,
    WheelChart,
    HonorList,
}

impl ItemKind {
    pub const ALL: [ItemKind; 14] = [
        ItemKind::Divider,
        ItemKind::NewLine,
        ItemKind::NewPage,
        ItemKind::Tag,
        ItemKind::Quote,
        ItemKind::Paragraph,
        ItemKind::Generic,
        ItemKind::Achievement,
        ItemKind::Skill,
        ItemKind::Item,
        ItemKind::Event,
        ItemKind::EventEntry,
        ItemKind::WheelChart,
        ItemKind::HonorList,
    ];

    pub const fn discriminator(self) -> &'static str {
        match self {
            ItemKind::Divider => "DIVIDER",
            ItemKind::NewLine => "NEWLINE",
            ItemKind::NewPage => "NEWPAGE",
            ItemKind::Tag => "TAG",
            ItemKind::Quote => "QUOTE",
            ItemKind::Paragraph => "PARAGRAPH",
            ItemKind::Generic => "GENERIC",
            ItemKind::Achievement => "ACHIEVEMENT",
            ItemKind::Skill => "SKILL",
            ItemKind::Item => "ITEM",
            ItemKind::Event => "EVENT",
            ItemKind::EventEntry => "EVENT_ENTRY",
            ItemKind::WheelChart => "WHEELCHART",
            ItemKind::HonorList => "HONOR_LIST",
        }
    }

    /// Markers carry no payload and serialize as `{"type": ...}` only.
    pub const fn is_marker(self) -> bool {
        matches!(self, ItemKind::Divider | ItemKind::NewLine | ItemKind::NewPage)
    }

    pub fn from_discriminator(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.discriminator() == value)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// Per-dialect schema descriptor.
pub trait Dialect: Sized + 'static {
    /// Short name, also the schema file stem.
    const NAME: &'static str;
    const SCHEMA_FILE: &'static str;
    /// Whether the top-level document carries a `footer` object.
    const HAS_FOOTER: bool;
    /// Item kinds a section of this dialect may hold.
    const ITEM_KINDS: &'static [ItemKind];

    type Config: Serialize + DeserializeOwned + Default + Clone + fmt::Debug + PartialEq;
    type Header: Serialize + DeserializeOwned + Default + Clone + fmt::Debug + PartialEq;
    type Footer: Serialize + DeserializeOwned + Default + Clone + fmt::Debug + PartialEq;

    /// Draft-07 schema document the serialized resume must satisfy.
    fn schema_source() -> &'static str;

    fn supports(kind: ItemKind) -> bool {
        Self::ITEM_KINDS.contains(&kind)
    }

    fn check_kind(kind: ItemKind) -> Result<(), ModelError> {
        if Self::supports(kind) {
            Ok(())
        } else {
            Err(ModelError::UnsupportedVariant {
                dialect: Self::NAME,
                kind: kind.discriminator().to_string(),
            })
        }
    }

    fn schema_path() -> String {
        format!("schemas/{}/{}", SCHEMA_VERSION, Self::SCHEMA_FILE)
    }
}
