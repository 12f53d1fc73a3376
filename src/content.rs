//! Section Content
//!
//! Every item a section can hold. The serde representation of each variant
//! is its projection: `{"type": <discriminator>, "content": <payload>}`,
//! with markers reduced to `{"type": <discriminator>}`.

use serde::{Deserialize, Serialize};

use crate::dialect::ItemKind;
use crate::duration::Duration;
use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum SectionItem {
    #[serde(rename = "DIVIDER")]
    Divider,
    #[serde(rename = "NEWLINE")]
    NewLine,
    #[serde(rename = "NEWPAGE")]
    NewPage,
    #[serde(rename = "TAG")]
    Tag(String),
    #[serde(rename = "QUOTE")]
    Quote(String),
    #[serde(rename = "PARAGRAPH")]
    Paragraph(String),
    /// Pass-through template fragment, emitted verbatim by renderers.
    #[serde(rename = "GENERIC")]
    Raw(String),
    #[serde(rename = "ACHIEVEMENT")]
    Achievement(Achievement),
    #[serde(rename = "SKILL")]
    Skill(Skill),
    #[serde(rename = "ITEM")]
    Item(Item),
    #[serde(rename = "EVENT")]
    Event(Event),
    #[serde(rename = "EVENT_ENTRY")]
    Entry(Event),
    #[serde(rename = "WHEELCHART")]
    WheelChart(WheelChart),
    #[serde(rename = "HONOR_LIST")]
    HonorList(HonorList),
}

impl SectionItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            SectionItem::Divider => ItemKind::Divider,
            SectionItem::NewLine => ItemKind::NewLine,
            SectionItem::NewPage => ItemKind::NewPage,
            SectionItem::Tag(_) => ItemKind::Tag,
            SectionItem::Quote(_) => ItemKind::Quote,
            SectionItem::Paragraph(_) => ItemKind::Paragraph,
            SectionItem::Raw(_) => ItemKind::Generic,
            SectionItem::Achievement(_) => ItemKind::Achievement,
            SectionItem::Skill(_) => ItemKind::Skill,
            SectionItem::Item(_) => ItemKind::Item,
            SectionItem::Event(_) => ItemKind::Event,
            SectionItem::Entry(_) => ItemKind::EventEntry,
            SectionItem::WheelChart(_) => ItemKind::WheelChart,
            SectionItem::HonorList(_) => ItemKind::HonorList,
        }
    }

    pub fn tag(label: impl Into<String>) -> Self {
        SectionItem::Tag(label.into())
    }

    pub fn quote(text: impl Into<String>) -> Self {
        SectionItem::Quote(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        SectionItem::Paragraph(text.into())
    }

    pub fn raw(fragment: impl Into<String>) -> Self {
        SectionItem::Raw(fragment.into())
    }

    pub fn to_json(&self) -> Result<serde_json::Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<Achievement> for SectionItem {
    fn from(value: Achievement) -> Self {
        SectionItem::Achievement(value)
    }
}

impl From<Skill> for SectionItem {
    fn from(value: Skill) -> Self {
        SectionItem::Skill(value)
    }
}

impl From<Item> for SectionItem {
    fn from(value: Item) -> Self {
        SectionItem::Item(value)
    }
}

impl From<WheelChart> for SectionItem {
    fn from(value: WheelChart) -> Self {
        SectionItem::WheelChart(value)
    }
}

impl From<HonorList> for SectionItem {
    fn from(value: HonorList) -> Self {
        SectionItem::HonorList(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub icon_name: String,
    pub achievement: String,
    pub detail: String,
}

impl Achievement {
    pub fn new(icon_name: impl Into<String>, achievement: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            icon_name: icon_name.into(),
            achievement: achievement.into(),
            detail: detail.into(),
        }
    }
}

/// Either a 1..=5 rating or a free-text fluency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillLevel {
    Rating { rating: f64 },
    Fluency { fluency: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SkillRepr")]
pub struct Skill {
    skill: String,
    #[serde(flatten)]
    level: SkillLevel,
}

#[derive(Deserialize)]
struct SkillRepr {
    skill: String,
    #[serde(flatten)]
    level: SkillLevel,
}

impl TryFrom<SkillRepr> for Skill {
    type Error = ModelError;

    fn try_from(repr: SkillRepr) -> Result<Self, Self::Error> {
        match repr.level {
            SkillLevel::Rating { rating } => Skill::rated(repr.skill, rating),
            level => Ok(Skill { skill: repr.skill, level }),
        }
    }
}

impl Skill {
    pub fn rated(name: impl Into<String>, rating: f64) -> Result<Self, ModelError> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(ModelError::RatingOutOfRange(rating));
        }
        Ok(Self { skill: name.into(), level: SkillLevel::Rating { rating } })
    }

    pub fn fluent(name: impl Into<String>, fluency: impl Into<String>) -> Self {
        Self { skill: name.into(), level: SkillLevel::Fluency { fluency: fluency.into() } }
    }

    pub fn name(&self) -> &str {
        &self.skill
    }

    pub fn level(&self) -> &SkillLevel {
        &self.level
    }
}

/// A description line; bulleted unless stated otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub description: String,
    #[serde(default = "default_true")]
    pub with_bullet: bool,
}

fn default_true() -> bool { true }

impl Item {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), with_bullet: true }
    }

    pub fn unbulleted(description: impl Into<String>) -> Self {
        Self { description: description.into(), with_bullet: false }
    }
}

/// Payload shared by `EVENT` and `EVENT_ENTRY` items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub holder: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub description: Vec<Item>,
}

impl Event {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Default::default() }
    }

    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = holder.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.description.push(item);
        self
    }

    /// Appends one bulleted item per line.
    pub fn with_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description.extend(lines.into_iter().map(Item::new));
        self
    }

    /// Wraps as an AltaCV `EVENT` item.
    pub fn into_event(self) -> SectionItem {
        SectionItem::Event(self)
    }

    /// Wraps as an AwesomeCV `EVENT_ENTRY` item.
    pub fn into_entry(self) -> SectionItem {
        SectionItem::Entry(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WheelChartRepr")]
pub struct WheelChart {
    inner_radius: f64,
    outer_radius: f64,
    pub items: Vec<WheelChartSlice>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WheelChartRepr {
    inner_radius: f64,
    outer_radius: f64,
    #[serde(default)]
    items: Vec<WheelChartSlice>,
}

impl TryFrom<WheelChartRepr> for WheelChart {
    type Error = ModelError;

    fn try_from(repr: WheelChartRepr) -> Result<Self, Self::Error> {
        Ok(WheelChart { items: repr.items, ..WheelChart::new(repr.inner_radius, repr.outer_radius)? })
    }
}

impl WheelChart {
    /// Radii are in cm and must be finite and non-negative.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Result<Self, ModelError> {
        for (field, value) in [("innerRadius", inner_radius), ("outerRadius", outer_radius)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ModelError::OutOfRange { field, value, expected: "a non-negative number" });
            }
        }
        Ok(Self { inner_radius, outer_radius, items: vec![] })
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn with_slice(mut self, slice: WheelChartSlice) -> Self {
        self.items.push(slice);
        self
    }
}

/// One slice: weight, label width in em, colour and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelChartSlice {
    pub value: u32,
    pub text_width: u32,
    pub color: String,
    pub detail: String,
}

impl WheelChartSlice {
    pub fn new(value: u32, text_width: u32, color: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { value, text_width, color: color.into(), detail: detail.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HonorList {
    pub section_title: String,
    #[serde(default)]
    pub honor_items: Vec<Honor>,
}

impl HonorList {
    pub fn new(section_title: impl Into<String>) -> Self {
        Self { section_title: section_title.into(), honor_items: vec![] }
    }

    pub fn with_honor(mut self, honor: Honor) -> Self {
        self.honor_items.push(honor);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Honor {
    pub award: String,
    pub event: String,
    pub location: String,
    pub date: String,
}

impl Honor {
    pub fn new(
        award: impl Into<String>,
        event: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            award: award.into(),
            event: event.into(),
            location: location.into(),
            date: date.into(),
        }
    }
}
